//! # Appointment API Module
//!
//! Controller logic for the appointment resource. The one non-trivial piece
//! is schedule canonicalization: client revisions disagreed on the wire
//! shape of the appointment time (combined ISO timestamp vs separate date
//! and time strings), so every accepted shape funnels into a single UTC
//! timestamp here, at the boundary.

use crate::{
    api, consts,
    models::{self, appointment::AppointmentStatus},
    repo,
};
use anyhow::{anyhow, bail};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Converts any of the observed client schedule shapes into the canonical
/// UTC timestamp.
///
/// A combined `datetime` value wins when present: RFC 3339, the HTML
/// `datetime-local` shape (with or without seconds), or a bare date taken
/// as midnight. Otherwise a `date` string is required and an optional
/// `time` string refines it. Naive values are interpreted as UTC.
pub fn canonicalize_schedule(
    datetime: Option<&str>,
    date: Option<&str>,
    time: Option<&str>,
) -> anyhow::Result<DateTime<Utc>> {
    if let Some(raw) = datetime.map(str::trim).filter(|v| !v.is_empty()) {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Ok(parsed.with_timezone(&Utc));
        }
        if let Ok(parsed) =
            NaiveDateTime::parse_from_str(raw, consts::DATETIME_LOCAL_INPUT_FORMAT)
        {
            return Ok(parsed.and_utc());
        }
        if let Ok(parsed) =
            NaiveDateTime::parse_from_str(raw, consts::DATETIME_LOCAL_WITH_SECONDS_INPUT_FORMAT)
        {
            return Ok(parsed.and_utc());
        }
        if let Ok(parsed) = NaiveDate::parse_from_str(raw, consts::DATE_INPUT_FORMAT) {
            return Ok(parsed.and_time(NaiveTime::MIN).and_utc());
        }

        bail!("datetime value '{raw}' is not a recognized timestamp");
    }

    let Some(raw_date) = date.map(str::trim).filter(|v| !v.is_empty()) else {
        bail!("a datetime or date value is required");
    };

    let day = NaiveDate::parse_from_str(raw_date, consts::DATE_INPUT_FORMAT)
        .map_err(|e| anyhow!("date value '{raw_date}' is not a recognized date: {e}"))?;

    let time_of_day = match time.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw_time) => NaiveTime::parse_from_str(raw_time, consts::TIME_INPUT_FORMAT)
            .or_else(|_| {
                NaiveTime::parse_from_str(raw_time, consts::TIME_WITH_SECONDS_INPUT_FORMAT)
            })
            .map_err(|e| anyhow!("time value '{raw_time}' is not a recognized time: {e}"))?,
        None => NaiveTime::MIN,
    };

    Ok(day.and_time(time_of_day).and_utc())
}

fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Untrusted body of an appointment creation request.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    #[serde(default)]
    pub pet_name: String,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub vet_name: String,
    pub datetime: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub reason: Option<String>,
    pub notes: Option<String>,
    pub status: Option<AppointmentStatus>,
}

impl CreateAppointmentRequest {
    pub fn validate(&self) -> anyhow::Result<()> {
        if api::is_blank(&self.pet_name) {
            bail!("petName is required")
        }
        if api::is_blank(&self.owner_name) {
            bail!("ownerName is required")
        }
        if api::is_blank(&self.vet_name) {
            bail!("vetName is required")
        }
        canonicalize_schedule(
            self.datetime.as_deref(),
            self.date.as_deref(),
            self.time.as_deref(),
        )?;

        Ok(())
    }
}

/// Partial appointment fields for an update; absent keys keep their stored
/// values.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    pub pet_name: Option<String>,
    pub owner_name: Option<String>,
    pub vet_name: Option<String>,
    pub datetime: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub reason: Option<String>,
    pub notes: Option<String>,
    pub status: Option<AppointmentStatus>,
}

impl UpdateAppointmentRequest {
    fn has_schedule_input(&self) -> bool {
        self.datetime.is_some() || self.date.is_some() || self.time.is_some()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let text_fields = [
            ("petName", &self.pet_name),
            ("ownerName", &self.owner_name),
            ("vetName", &self.vet_name),
        ];

        for (field, value) in text_fields {
            if let Some(value) = value {
                if api::is_blank(value) {
                    bail!("{field} cannot be empty")
                }
            }
        }

        if self.has_schedule_input() {
            canonicalize_schedule(
                self.datetime.as_deref(),
                self.date.as_deref(),
                self.time.as_deref(),
            )?;
        }

        Ok(())
    }
}

/// Wire representation of an appointment document. The canonical timestamp
/// travels under the `datetime` key the latest client revision reads.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentSchema {
    pub id: Uuid,
    pub pet_name: String,
    pub owner_name: String,
    pub vet_name: String,
    #[serde(rename = "datetime")]
    pub scheduled_at: DateTime<Utc>,
    pub reason: Option<String>,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<models::appointment::Appointment> for AppointmentSchema {
    fn from(val: models::appointment::Appointment) -> Self {
        AppointmentSchema {
            id: val.id,
            pet_name: val.pet_name,
            owner_name: val.owner_name,
            vet_name: val.vet_name,
            scheduled_at: val.scheduled_at,
            reason: val.reason,
            notes: val.notes,
            status: val.status,
            created_at: val.created_at,
            updated_at: val.updated_at,
        }
    }
}

/// Confirmation body for an appointment deletion.
#[derive(Debug, Serialize)]
pub struct DeleteAppointmentResponse {
    pub message: String,
}

/// Persists a new appointment document with a freshly generated id.
///
/// Status defaults to `Scheduled` when the client omits it.
pub async fn create_appointment(
    request: CreateAppointmentRequest,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<AppointmentSchema> {
    let scheduled_at = canonicalize_schedule(
        request.datetime.as_deref(),
        request.date.as_deref(),
        request.time.as_deref(),
    )?;

    let now = Utc::now();
    let appointment = models::appointment::Appointment {
        id: Uuid::new_v4(),
        pet_name: request.pet_name.trim().to_string(),
        owner_name: request.owner_name.trim().to_string(),
        vet_name: request.vet_name.trim().to_string(),
        scheduled_at,
        reason: normalize_optional_text(request.reason),
        notes: normalize_optional_text(request.notes),
        status: request.status.unwrap_or_default(),
        created_at: now,
        updated_at: now,
    };

    repo.insert_appointment(&appointment).await?;

    Ok(appointment.into())
}

/// Retrieves every appointment document in the store.
pub async fn get_all_appointments(
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Vec<AppointmentSchema>> {
    Ok(repo
        .get_all_appointments()
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn get_appointment_by_id(
    appointment_id: Uuid,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Option<AppointmentSchema>> {
    Ok(repo
        .get_appointment_by_id(appointment_id)
        .await?
        .map(Into::into))
}

/// Merges the provided fields into the stored document and writes it back.
///
/// Returns `None` when no document has the id. Schedule fields are
/// re-canonicalized only when the payload carries any of them.
pub async fn update_appointment(
    appointment_id: Uuid,
    request: UpdateAppointmentRequest,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Option<AppointmentSchema>> {
    let Some(mut appointment) = repo.get_appointment_by_id(appointment_id).await? else {
        return Ok(None);
    };

    if let Some(ref pet_name) = request.pet_name {
        appointment.pet_name = pet_name.trim().to_string();
    }
    if let Some(ref owner_name) = request.owner_name {
        appointment.owner_name = owner_name.trim().to_string();
    }
    if let Some(ref vet_name) = request.vet_name {
        appointment.vet_name = vet_name.trim().to_string();
    }
    if request.has_schedule_input() {
        appointment.scheduled_at = canonicalize_schedule(
            request.datetime.as_deref(),
            request.date.as_deref(),
            request.time.as_deref(),
        )?;
    }
    if let Some(reason) = request.reason {
        appointment.reason = normalize_optional_text(Some(reason));
    }
    if let Some(notes) = request.notes {
        appointment.notes = normalize_optional_text(Some(notes));
    }
    if let Some(status) = request.status {
        appointment.status = status;
    }
    appointment.updated_at = Utc::now();

    repo.update_appointment(&appointment).await?;

    Ok(Some(appointment.into()))
}

/// Removes the appointment document. A miss still confirms; only store
/// faults fail.
pub async fn delete_appointment(
    appointment_id: Uuid,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<DeleteAppointmentResponse> {
    repo.delete_appointment(appointment_id).await?;

    Ok(DeleteAppointmentResponse {
        message: "Appointment deleted successfully".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MockAppRepo;
    use chrono::TimeZone;
    use mockall::predicate::*;

    fn create_test_appointment(id: Uuid) -> models::appointment::Appointment {
        models::appointment::Appointment {
            id,
            pet_name: "Boba".to_string(),
            owner_name: "John Doe".to_string(),
            vet_name: "Dr. Smith".to_string(),
            scheduled_at: Utc.with_ymd_and_hms(2025, 12, 31, 10, 30, 0).unwrap(),
            reason: Some("Checkup".to_string()),
            notes: None,
            status: AppointmentStatus::Scheduled,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn create_test_request() -> CreateAppointmentRequest {
        CreateAppointmentRequest {
            pet_name: "Boba".to_string(),
            owner_name: "John Doe".to_string(),
            vet_name: "Dr. Smith".to_string(),
            datetime: Some("2025-12-31T10:30:00Z".to_string()),
            reason: Some("Checkup".to_string()),
            ..CreateAppointmentRequest::default()
        }
    }

    #[test]
    fn test_canonicalize_schedule_accepts_rfc3339() {
        let parsed = canonicalize_schedule(Some("2025-12-31T10:30:00-06:00"), None, None).unwrap();

        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 12, 31, 16, 30, 0).unwrap());
    }

    #[test]
    fn test_canonicalize_schedule_accepts_datetime_local() {
        let parsed = canonicalize_schedule(Some("2025-12-31T10:30"), None, None).unwrap();

        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 12, 31, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_canonicalize_schedule_accepts_bare_date_as_midnight() {
        let parsed = canonicalize_schedule(Some("2025-12-31"), None, None).unwrap();

        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_canonicalize_schedule_combines_split_date_and_time() {
        let parsed = canonicalize_schedule(None, Some("2025-12-31"), Some("10:30")).unwrap();

        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 12, 31, 10, 30, 0).unwrap());

        let with_seconds =
            canonicalize_schedule(None, Some("2025-12-31"), Some("10:30:45")).unwrap();

        assert_eq!(
            with_seconds,
            Utc.with_ymd_and_hms(2025, 12, 31, 10, 30, 45).unwrap()
        );
    }

    #[test]
    fn test_canonicalize_schedule_rejects_unparseable_input() {
        assert!(canonicalize_schedule(Some("next tuesday"), None, None).is_err());
        assert!(canonicalize_schedule(None, None, Some("10:30")).is_err());
        assert!(canonicalize_schedule(None, None, None).is_err());
        assert!(canonicalize_schedule(Some("  "), Some("  "), None).is_err());
    }

    #[ntex::test]
    async fn test_create_appointment_defaults_status_to_scheduled() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_insert_appointment()
            .withf(|appointment| {
                appointment.status == AppointmentStatus::Scheduled && !appointment.id.is_nil()
            })
            .times(1)
            .returning(|_| Ok(()));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let created = create_appointment(create_test_request(), &mock_repo)
            .await
            .unwrap();

        assert_eq!(created.status, AppointmentStatus::Scheduled);
        assert_eq!(
            created.scheduled_at,
            Utc.with_ymd_and_hms(2025, 12, 31, 10, 30, 0).unwrap()
        );
        assert_eq!(created.reason.as_deref(), Some("Checkup"));
        assert_eq!(created.notes, None);
    }

    #[test]
    fn test_create_request_rejects_missing_required_fields() {
        let missing_vet = CreateAppointmentRequest {
            vet_name: String::new(),
            ..create_test_request()
        };
        assert!(missing_vet.validate().is_err());

        let missing_schedule = CreateAppointmentRequest {
            datetime: None,
            ..create_test_request()
        };
        assert!(missing_schedule.validate().is_err());

        assert!(create_test_request().validate().is_ok());
    }

    #[ntex::test]
    async fn test_update_appointment_changes_only_provided_fields() {
        let appointment_id = Uuid::new_v4();
        let existing = create_test_appointment(appointment_id);
        let prior_schedule = existing.scheduled_at;

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_appointment_by_id()
            .with(eq(appointment_id))
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo
            .expect_update_appointment()
            .withf(|appointment| appointment.reason.as_deref() == Some("Updated Reason"))
            .times(1)
            .returning(|_| Ok(()));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let request = UpdateAppointmentRequest {
            reason: Some("Updated Reason".to_string()),
            ..UpdateAppointmentRequest::default()
        };

        let updated = update_appointment(appointment_id, request, &mock_repo)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.reason.as_deref(), Some("Updated Reason"));
        assert_eq!(updated.pet_name, "Boba");
        assert_eq!(updated.vet_name, "Dr. Smith");
        assert_eq!(updated.scheduled_at, prior_schedule);
        assert_eq!(updated.status, AppointmentStatus::Scheduled);
    }

    #[ntex::test]
    async fn test_update_appointment_missing_id_returns_none() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_appointment_by_id()
            .times(1)
            .returning(|_| Ok(None));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let outcome = update_appointment(
            Uuid::new_v4(),
            UpdateAppointmentRequest::default(),
            &mock_repo,
        )
        .await
        .unwrap();

        assert!(outcome.is_none());
    }

    #[ntex::test]
    async fn test_update_appointment_recanonicalizes_schedule() {
        let appointment_id = Uuid::new_v4();
        let existing = create_test_appointment(appointment_id);

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_appointment_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo
            .expect_update_appointment()
            .times(1)
            .returning(|_| Ok(()));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let request = UpdateAppointmentRequest {
            date: Some("2026-01-15".to_string()),
            time: Some("09:00".to_string()),
            ..UpdateAppointmentRequest::default()
        };

        let updated = update_appointment(appointment_id, request, &mock_repo)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            updated.scheduled_at,
            Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap()
        );
    }

    #[ntex::test]
    async fn test_delete_appointment_confirms() {
        let appointment_id = Uuid::new_v4();

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_delete_appointment()
            .with(eq(appointment_id))
            .times(1)
            .returning(|_| Ok(1));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let confirmation = delete_appointment(appointment_id, &mock_repo).await.unwrap();

        assert_eq!(confirmation.message, "Appointment deleted successfully");
    }
}
