//! Registration entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::RegistrationRecord;
use sqlx::FromRow;

/// Database row mapping for the registrations table.
#[derive(Debug, Clone, FromRow)]
pub struct RegistrationEntity {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
}

impl From<RegistrationEntity> for RegistrationRecord {
    fn from(entity: RegistrationEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            phone_number: entity.phone_number,
            age: entity.age,
            created_at: entity.created_at,
        }
    }
}
