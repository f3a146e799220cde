use ntex::web;

use crate::{
    api,
    rest::{AppState, errors, middleware, utils},
};

#[web::post("")]
async fn create_pet(
    _: middleware::bearer_token::BearerAuth,
    app_state: web::types::State<AppState>,
    body: web::types::Json<api::pet::CreatePetRequest>,
) -> Result<impl web::Responder, web::Error> {
    let request = body.into_inner();
    request
        .validate()
        .map_err(|e| errors::ApiError::Validation(e.to_string()))?;

    let created = api::pet::create_pet(request, &app_state.repo)
        .await
        .map_err(|e| errors::ApiError::Internal(e.to_string()))?;

    Ok(web::HttpResponse::Created().json(&created))
}

#[web::get("")]
async fn get_all_pets(
    _: middleware::bearer_token::BearerAuth,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let pets = api::pet::get_all_pets(&app_state.repo)
        .await
        .map_err(|e| errors::ApiError::Internal(e.to_string()))?;

    Ok(web::HttpResponse::Ok().json(&pets))
}

#[web::get("/{pet_id}")]
async fn get_pet_by_id(
    _: middleware::bearer_token::BearerAuth,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(String,)>,
) -> Result<impl web::Responder, web::Error> {
    let pet_id = utils::parse_document_id(&path.0)?;

    match api::pet::get_pet_by_id(pet_id, &app_state.repo)
        .await
        .map_err(|e| errors::ApiError::Internal(e.to_string()))?
    {
        Some(pet) => Ok(web::HttpResponse::Ok().json(&pet)),
        None => Err(errors::ApiError::NotFound("Pet not found".to_string()).into()),
    }
}

#[web::put("/{pet_id}")]
async fn update_pet(
    _: middleware::bearer_token::BearerAuth,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(String,)>,
    body: web::types::Json<api::pet::UpdatePetRequest>,
) -> Result<impl web::Responder, web::Error> {
    let pet_id = utils::parse_document_id(&path.0)?;
    let request = body.into_inner();
    request
        .validate()
        .map_err(|e| errors::ApiError::Validation(e.to_string()))?;

    match api::pet::update_pet(pet_id, request, &app_state.repo)
        .await
        .map_err(|e| errors::ApiError::Internal(e.to_string()))?
    {
        Some(pet) => Ok(web::HttpResponse::Ok().json(&pet)),
        None => Err(errors::ApiError::NotFound("Pet not found".to_string()).into()),
    }
}

#[web::delete("/{pet_id}")]
async fn delete_pet(
    _: middleware::bearer_token::BearerAuth,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(String,)>,
) -> Result<impl web::Responder, web::Error> {
    let pet_id = utils::parse_document_id(&path.0)?;

    let confirmation = api::pet::delete_pet(pet_id, &app_state.repo)
        .await
        .map_err(|e| errors::ApiError::Internal(e.to_string()))?;

    Ok(web::HttpResponse::Ok().json(&confirmation))
}
