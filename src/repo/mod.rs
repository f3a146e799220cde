pub mod sqlite;
pub mod sqlite_queries;

use crate::models;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppRepo {
    async fn insert_pet(&self, pet: &models::pet::Pet) -> anyhow::Result<()>;

    async fn get_all_pets(&self) -> anyhow::Result<Vec<models::pet::Pet>>;

    async fn get_pet_by_id(&self, pet_id: Uuid) -> anyhow::Result<Option<models::pet::Pet>>;

    async fn update_pet(&self, pet: &models::pet::Pet) -> anyhow::Result<()>;

    /// Returns the number of documents removed; a miss is not an error.
    async fn delete_pet(&self, pet_id: Uuid) -> anyhow::Result<u64>;

    async fn insert_appointment(
        &self,
        appointment: &models::appointment::Appointment,
    ) -> anyhow::Result<()>;

    async fn get_all_appointments(
        &self,
    ) -> anyhow::Result<Vec<models::appointment::Appointment>>;

    async fn get_appointment_by_id(
        &self,
        appointment_id: Uuid,
    ) -> anyhow::Result<Option<models::appointment::Appointment>>;

    async fn update_appointment(
        &self,
        appointment: &models::appointment::Appointment,
    ) -> anyhow::Result<()>;

    async fn delete_appointment(&self, appointment_id: Uuid) -> anyhow::Result<u64>;
}

pub type ImplAppRepo = Box<dyn AppRepo>;
