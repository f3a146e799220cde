use crate::models;
use async_trait::async_trait;
use sqlx::{FromRow, Row, SqlitePool, sqlite::SqliteRow};
use uuid::Uuid;

use super::{AppRepo, sqlite_queries};

#[derive(Clone)]
pub struct SqlxSqliteRepo {
    pub db_pool: SqlitePool,
}

impl FromRow<'_, SqliteRow> for models::pet::Pet {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        let id: uuid::fmt::Hyphenated = row.try_get("id")?;

        Ok(Self {
            id: id.into(),
            name: row.try_get("name")?,
            species: row.try_get("species")?,
            age: row.try_get("age")?,
            owner_name: row.try_get("owner_name")?,
            owner_contact: row.try_get("owner_contact")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::appointment::Appointment {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        let id: uuid::fmt::Hyphenated = row.try_get("id")?;

        Ok(Self {
            id: id.into(),
            pet_name: row.try_get("pet_name")?,
            owner_name: row.try_get("owner_name")?,
            vet_name: row.try_get("vet_name")?,
            scheduled_at: row.try_get("scheduled_at")?,
            reason: row.try_get("reason")?,
            notes: row.try_get("notes")?,
            status: serde_json::from_str::<models::appointment::AppointmentStatus>(&format!(
                "\"{}\"",
                row.try_get::<String, &str>("status")?
            ))
            .unwrap_or_default(),
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl SqlxSqliteRepo {
    /// Materializes both collections; the store owns no other schema.
    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_CREATE_PET_TABLE)
            .execute(&self.db_pool)
            .await?;
        sqlx::query(sqlite_queries::QUERY_CREATE_APPOINTMENT_TABLE)
            .execute(&self.db_pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl AppRepo for SqlxSqliteRepo {
    async fn insert_pet(&self, pet: &models::pet::Pet) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_PET)
            .bind(pet.id.to_string())
            .bind(&pet.name)
            .bind(&pet.species)
            .bind(pet.age)
            .bind(&pet.owner_name)
            .bind(&pet.owner_contact)
            .bind(pet.created_at)
            .bind(pet.updated_at)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn get_all_pets(&self) -> anyhow::Result<Vec<models::pet::Pet>> {
        Ok(
            sqlx::query_as::<_, models::pet::Pet>(sqlite_queries::QUERY_GET_ALL_PETS)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn get_pet_by_id(&self, pet_id: Uuid) -> anyhow::Result<Option<models::pet::Pet>> {
        Ok(
            sqlx::query_as::<_, models::pet::Pet>(sqlite_queries::QUERY_GET_PET_BY_ID)
                .bind(pet_id.to_string())
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn update_pet(&self, pet: &models::pet::Pet) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_UPDATE_PET)
            .bind(pet.id.to_string())
            .bind(&pet.name)
            .bind(&pet.species)
            .bind(pet.age)
            .bind(&pet.owner_name)
            .bind(&pet.owner_contact)
            .bind(pet.updated_at)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn delete_pet(&self, pet_id: Uuid) -> anyhow::Result<u64> {
        Ok(sqlx::query(sqlite_queries::QUERY_DELETE_PET)
            .bind(pet_id.to_string())
            .execute(&self.db_pool)
            .await?
            .rows_affected())
    }

    async fn insert_appointment(
        &self,
        appointment: &models::appointment::Appointment,
    ) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_APPOINTMENT)
            .bind(appointment.id.to_string())
            .bind(&appointment.pet_name)
            .bind(&appointment.owner_name)
            .bind(&appointment.vet_name)
            .bind(appointment.scheduled_at)
            .bind(&appointment.reason)
            .bind(&appointment.notes)
            .bind(appointment.status.to_string())
            .bind(appointment.created_at)
            .bind(appointment.updated_at)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn get_all_appointments(
        &self,
    ) -> anyhow::Result<Vec<models::appointment::Appointment>> {
        Ok(sqlx::query_as::<_, models::appointment::Appointment>(
            sqlite_queries::QUERY_GET_ALL_APPOINTMENTS,
        )
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn get_appointment_by_id(
        &self,
        appointment_id: Uuid,
    ) -> anyhow::Result<Option<models::appointment::Appointment>> {
        Ok(sqlx::query_as::<_, models::appointment::Appointment>(
            sqlite_queries::QUERY_GET_APPOINTMENT_BY_ID,
        )
        .bind(appointment_id.to_string())
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn update_appointment(
        &self,
        appointment: &models::appointment::Appointment,
    ) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_UPDATE_APPOINTMENT)
            .bind(appointment.id.to_string())
            .bind(&appointment.pet_name)
            .bind(&appointment.owner_name)
            .bind(&appointment.vet_name)
            .bind(appointment.scheduled_at)
            .bind(&appointment.reason)
            .bind(&appointment.notes)
            .bind(appointment.status.to_string())
            .bind(appointment.updated_at)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn delete_appointment(&self, appointment_id: Uuid) -> anyhow::Result<u64> {
        Ok(sqlx::query(sqlite_queries::QUERY_DELETE_APPOINTMENT)
            .bind(appointment_id.to_string())
            .execute(&self.db_pool)
            .await?
            .rows_affected())
    }
}
