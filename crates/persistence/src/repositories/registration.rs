//! Registration repository for database operations.

use domain::models::{NewRegistration, RegistrationRecord};
use domain::services::RegistrationStore;
use domain::StoreError;
use sqlx::PgPool;

use crate::entities::RegistrationEntity;
use crate::metrics::{record_pool_metrics, QueryTimer};

/// Repository for the append-only registrations table.
#[derive(Clone)]
pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    /// Creates a new RegistrationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Insert a validated registration; the database assigns id and created_at.
    pub async fn create_registration(
        &self,
        registration: &NewRegistration,
    ) -> Result<RegistrationEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_registration");
        let result = sqlx::query_as::<_, RegistrationEntity>(
            r#"
            INSERT INTO registrations (name, phone_number, age)
            VALUES ($1, $2, $3)
            RETURNING id, name, phone_number, age, created_at
            "#,
        )
        .bind(&registration.name)
        .bind(&registration.phone_number)
        .bind(registration.age)
        .fetch_one(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// List all registrations, newest first.
    pub async fn list_registrations(&self) -> Result<Vec<RegistrationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_registrations");
        let result = sqlx::query_as::<_, RegistrationEntity>(
            r#"
            SELECT id, name, phone_number, age, created_at
            FROM registrations
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.finish(&result);
        result
    }
}

/// Maps sqlx failures onto the domain's store errors.
pub fn store_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreError::Unavailable(err.to_string())
        }
        sqlx::Error::Database(db_err) => StoreError::Rejected(db_err.to_string()),
        other => StoreError::Rejected(other.to_string()),
    }
}

#[async_trait::async_trait]
impl RegistrationStore for RegistrationRepository {
    async fn insert(
        &self,
        registration: &NewRegistration,
    ) -> Result<RegistrationRecord, StoreError> {
        self.create_registration(registration)
            .await
            .map(RegistrationRecord::from)
            .map_err(store_error)
    }

    async fn list_newest_first(&self) -> Result<Vec<RegistrationRecord>, StoreError> {
        let rows = self.list_registrations().await.map_err(store_error)?;
        Ok(rows.into_iter().map(RegistrationRecord::from).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        record_pool_metrics(&self.pool);
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(store_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_pool_timeout_is_unavailable() {
        assert!(matches!(
            store_error(sqlx::Error::PoolTimedOut),
            StoreError::Unavailable(_)
        ));
        assert!(matches!(
            store_error(sqlx::Error::PoolClosed),
            StoreError::Unavailable(_)
        ));
    }

    #[test]
    fn test_store_error_io_is_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(matches!(
            store_error(sqlx::Error::Io(io)),
            StoreError::Unavailable(_)
        ));
    }

    #[test]
    fn test_store_error_row_not_found_is_rejected() {
        assert!(matches!(
            store_error(sqlx::Error::RowNotFound),
            StoreError::Rejected(_)
        ));
    }
}
