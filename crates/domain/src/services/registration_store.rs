//! Datastore abstraction for registrations.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::{NewRegistration, RegistrationRecord};

/// Append-only datastore the registration service writes to.
#[async_trait::async_trait]
pub trait RegistrationStore: Send + Sync {
    /// Persist a validated registration and return the stored row.
    async fn insert(&self, registration: &NewRegistration)
        -> Result<RegistrationRecord, StoreError>;

    /// All registrations, most recently created first.
    async fn list_newest_first(&self) -> Result<Vec<RegistrationRecord>, StoreError>;

    /// Cheap connectivity check for health probes.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// In-memory store for development and testing.
///
/// Assigns sequential ids starting at 1 and stamps `created_at` on insert.
#[derive(Debug, Default)]
pub struct InMemoryRegistrationStore {
    records: RwLock<Vec<RegistrationRecord>>,
    /// Whether to simulate failures for testing.
    simulate_failure: AtomicBool,
}

impl InMemoryRegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose every operation fails.
    pub fn failing() -> Self {
        let store = Self::new();
        store.set_failing(true);
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.simulate_failure.store(failing, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            tracing::warn!("In-memory registration store simulating failure");
            return Err(StoreError::Unavailable("Simulated failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RegistrationStore for InMemoryRegistrationStore {
    async fn insert(
        &self,
        registration: &NewRegistration,
    ) -> Result<RegistrationRecord, StoreError> {
        self.check_available()?;

        let mut records = self.records.write().await;
        let record = RegistrationRecord {
            id: records.len() as i64 + 1,
            name: registration.name.clone(),
            phone_number: registration.phone_number.clone(),
            age: registration.age,
            created_at: Utc::now(),
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn list_newest_first(&self) -> Result<Vec<RegistrationRecord>, StoreError> {
        self.check_available()?;

        let mut records = self.records.read().await.clone();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(records)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(name: &str, age: i32) -> NewRegistration {
        NewRegistration {
            name: name.to_string(),
            phone_number: "9876543210".to_string(),
            age,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = InMemoryRegistrationStore::new();
        let first = store.insert(&registration("Asha", 29)).await.unwrap();
        let second = store.insert(&registration("Ravi", 34)).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.name, "Ravi");
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = InMemoryRegistrationStore::new();
        store.insert(&registration("Asha", 29)).await.unwrap();
        store.insert(&registration("Ravi", 34)).await.unwrap();
        store.insert(&registration("Meera", 41)).await.unwrap();

        let names: Vec<_> = store
            .list_newest_first()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Meera", "Ravi", "Asha"]);
    }

    #[tokio::test]
    async fn test_failing_store() {
        let store = InMemoryRegistrationStore::failing();
        assert!(store.insert(&registration("Asha", 29)).await.is_err());
        assert!(store.list_newest_first().await.is_err());
        assert!(store.ping().await.is_err());
        assert!(store.is_empty().await);

        store.set_failing(false);
        assert!(store.ping().await.is_ok());
    }
}
