//! # Pet API Module
//!
//! Controller logic for the pet resource: one store operation per call,
//! typed request/response schemas, field validation at the boundary.

use crate::{api, models, repo};
use anyhow::bail;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Untrusted body of a pet creation request.
///
/// Text fields default to empty so a missing key reads as a validation
/// failure rather than a deserialization one.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub species: String,
    pub age: Option<u32>,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub owner_contact: String,
}

impl CreatePetRequest {
    pub fn validate(&self) -> anyhow::Result<()> {
        if api::is_blank(&self.name) {
            bail!("name is required")
        }
        if api::is_blank(&self.species) {
            bail!("species is required")
        }
        if self.age.is_none() {
            bail!("age is required")
        }
        if api::is_blank(&self.owner_name) {
            bail!("ownerName is required")
        }
        if api::is_blank(&self.owner_contact) {
            bail!("ownerContact is required")
        }

        Ok(())
    }
}

impl From<CreatePetRequest> for models::pet::Pet {
    fn from(val: CreatePetRequest) -> Self {
        let now = Utc::now();
        models::pet::Pet {
            id: Uuid::new_v4(),
            name: val.name.trim().to_string(),
            species: val.species.trim().to_string(),
            age: val.age.unwrap_or_default(),
            owner_name: val.owner_name.trim().to_string(),
            owner_contact: val.owner_contact.trim().to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial pet fields for an update; absent keys keep their stored values.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePetRequest {
    pub name: Option<String>,
    pub species: Option<String>,
    pub age: Option<u32>,
    pub owner_name: Option<String>,
    pub owner_contact: Option<String>,
}

impl UpdatePetRequest {
    pub fn validate(&self) -> anyhow::Result<()> {
        let text_fields = [
            ("name", &self.name),
            ("species", &self.species),
            ("ownerName", &self.owner_name),
            ("ownerContact", &self.owner_contact),
        ];

        for (field, value) in text_fields {
            if let Some(value) = value {
                if api::is_blank(value) {
                    bail!("{field} cannot be empty")
                }
            }
        }

        Ok(())
    }
}

/// Wire representation of a pet document.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PetSchema {
    pub id: Uuid,
    pub name: String,
    pub species: String,
    pub age: u32,
    pub owner_name: String,
    pub owner_contact: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<models::pet::Pet> for PetSchema {
    fn from(val: models::pet::Pet) -> Self {
        PetSchema {
            id: val.id,
            name: val.name,
            species: val.species,
            age: val.age,
            owner_name: val.owner_name,
            owner_contact: val.owner_contact,
            created_at: val.created_at,
            updated_at: val.updated_at,
        }
    }
}

/// Confirmation body for a pet deletion. Unlike the appointment variant it
/// carries an explicit success flag.
#[derive(Debug, Serialize)]
pub struct DeletePetResponse {
    pub success: bool,
    pub message: String,
}

/// Persists a new pet document with a freshly generated id.
pub async fn create_pet(
    request: CreatePetRequest,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<PetSchema> {
    let pet: models::pet::Pet = request.into();
    repo.insert_pet(&pet).await?;

    Ok(pet.into())
}

/// Retrieves every pet document in the store.
pub async fn get_all_pets(repo: &repo::ImplAppRepo) -> anyhow::Result<Vec<PetSchema>> {
    Ok(repo
        .get_all_pets()
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn get_pet_by_id(
    pet_id: Uuid,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Option<PetSchema>> {
    Ok(repo.get_pet_by_id(pet_id).await?.map(Into::into))
}

/// Merges the provided fields into the stored document and writes it back.
///
/// Returns `None` when no document has the id; fields absent from the
/// request retain their prior values.
pub async fn update_pet(
    pet_id: Uuid,
    request: UpdatePetRequest,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Option<PetSchema>> {
    let Some(mut pet) = repo.get_pet_by_id(pet_id).await? else {
        return Ok(None);
    };

    if let Some(name) = request.name {
        pet.name = name.trim().to_string();
    }
    if let Some(species) = request.species {
        pet.species = species.trim().to_string();
    }
    if let Some(age) = request.age {
        pet.age = age;
    }
    if let Some(owner_name) = request.owner_name {
        pet.owner_name = owner_name.trim().to_string();
    }
    if let Some(owner_contact) = request.owner_contact {
        pet.owner_contact = owner_contact.trim().to_string();
    }
    pet.updated_at = Utc::now();

    repo.update_pet(&pet).await?;

    Ok(Some(pet.into()))
}

/// Removes the pet document. A miss still confirms; only store faults fail.
pub async fn delete_pet(
    pet_id: Uuid,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<DeletePetResponse> {
    repo.delete_pet(pet_id).await?;

    Ok(DeletePetResponse {
        success: true,
        message: "Pet deleted successfully".to_string(),
    })
}
