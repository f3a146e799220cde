use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Display, Clone, Default, Deserialize, Serialize, PartialEq)]
pub enum AppointmentStatus {
    #[default]
    #[display("Scheduled")]
    #[serde(alias = "Scheduled", rename(serialize = "Scheduled"))]
    Scheduled,
    #[display("Completed")]
    #[serde(alias = "Completed", rename(serialize = "Completed"))]
    Completed,
    #[display("Cancelled")]
    #[serde(alias = "Cancelled", rename(serialize = "Cancelled"))]
    Cancelled,
}

/// An appointment document as persisted in the store.
///
/// `scheduled_at` is the canonical point in time; client-side shapes
/// (combined timestamp or split date + time strings) are converted at the
/// request boundary before a document is ever built.
///
/// The referenced pet is plain text, not a checked reference.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Appointment {
    pub id: Uuid,
    pub pet_name: String,
    pub owner_name: String,
    pub vet_name: String,
    pub scheduled_at: DateTime<Utc>,
    pub reason: Option<String>,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_with_capitalized_names() {
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::Cancelled).unwrap(),
            "\"Cancelled\""
        );
        assert_eq!(AppointmentStatus::Completed.to_string(), "Completed");
    }

    #[test]
    fn test_status_defaults_to_scheduled() {
        assert_eq!(AppointmentStatus::default(), AppointmentStatus::Scheduled);
    }
}
