use ntex::web;

use crate::{
    api,
    rest::{AppState, errors, middleware, utils},
};

#[web::post("")]
async fn create_appointment(
    _: middleware::bearer_token::BearerAuth,
    app_state: web::types::State<AppState>,
    body: web::types::Json<api::appointment::CreateAppointmentRequest>,
) -> Result<impl web::Responder, web::Error> {
    let request = body.into_inner();
    request
        .validate()
        .map_err(|e| errors::ApiError::Validation(e.to_string()))?;

    let created = api::appointment::create_appointment(request, &app_state.repo)
        .await
        .map_err(|e| errors::ApiError::Internal(e.to_string()))?;

    Ok(web::HttpResponse::Created().json(&created))
}

#[web::get("")]
async fn get_all_appointments(
    _: middleware::bearer_token::BearerAuth,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let appointments = api::appointment::get_all_appointments(&app_state.repo)
        .await
        .map_err(|e| errors::ApiError::Internal(e.to_string()))?;

    Ok(web::HttpResponse::Ok().json(&appointments))
}

#[web::get("/{appointment_id}")]
async fn get_appointment_by_id(
    _: middleware::bearer_token::BearerAuth,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(String,)>,
) -> Result<impl web::Responder, web::Error> {
    let appointment_id = utils::parse_document_id(&path.0)?;

    match api::appointment::get_appointment_by_id(appointment_id, &app_state.repo)
        .await
        .map_err(|e| errors::ApiError::Internal(e.to_string()))?
    {
        Some(appointment) => Ok(web::HttpResponse::Ok().json(&appointment)),
        None => Err(errors::ApiError::NotFound("Appointment not found".to_string()).into()),
    }
}

#[web::put("/{appointment_id}")]
async fn update_appointment(
    _: middleware::bearer_token::BearerAuth,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(String,)>,
    body: web::types::Json<api::appointment::UpdateAppointmentRequest>,
) -> Result<impl web::Responder, web::Error> {
    let appointment_id = utils::parse_document_id(&path.0)?;
    let request = body.into_inner();
    request
        .validate()
        .map_err(|e| errors::ApiError::Validation(e.to_string()))?;

    match api::appointment::update_appointment(appointment_id, request, &app_state.repo)
        .await
        .map_err(|e| errors::ApiError::Internal(e.to_string()))?
    {
        Some(appointment) => Ok(web::HttpResponse::Ok().json(&appointment)),
        None => Err(errors::ApiError::NotFound("Appointment not found".to_string()).into()),
    }
}

#[web::delete("/{appointment_id}")]
async fn delete_appointment(
    _: middleware::bearer_token::BearerAuth,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(String,)>,
) -> Result<impl web::Responder, web::Error> {
    let appointment_id = utils::parse_document_id(&path.0)?;

    let confirmation = api::appointment::delete_appointment(appointment_id, &app_state.repo)
        .await
        .map_err(|e| errors::ApiError::Internal(e.to_string()))?;

    Ok(web::HttpResponse::Ok().json(&confirmation))
}
