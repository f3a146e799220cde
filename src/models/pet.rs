use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A pet document as persisted in the store.
///
/// `id` is assigned once at creation and never reassigned.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Pet {
    pub id: Uuid,
    pub name: String,
    pub species: String,
    pub age: u32,
    pub owner_name: String,
    pub owner_contact: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
