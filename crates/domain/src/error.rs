//! Domain error types.

use thiserror::Error;

/// Errors produced while registering or listing registrations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A required field is absent or empty. Carries the wire name of the field.
    #[error("All fields are required: {0} is missing")]
    MissingField(&'static str),

    #[error("{0}")]
    InvalidPhone(String),

    #[error("{0}")]
    InvalidAge(String),

    /// The datastore was unavailable or rejected the operation.
    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    /// A timestamp handed to the ticket formatter could not be parsed.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl RegistrationError {
    /// Returns true for errors caused by the submitted data.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RegistrationError::MissingField(_)
                | RegistrationError::InvalidPhone(_)
                | RegistrationError::InvalidAge(_)
        )
    }

    /// Short machine-readable reason, used for metric labels and error codes.
    pub fn reason(&self) -> &'static str {
        match self {
            RegistrationError::MissingField(_) => "missing_field",
            RegistrationError::InvalidPhone(_) => "invalid_phone",
            RegistrationError::InvalidAge(_) => "invalid_age",
            RegistrationError::PersistenceFailure(_) => "persistence_failure",
            RegistrationError::InvalidTimestamp(_) => "invalid_timestamp",
        }
    }
}

/// Errors surfaced by a [`RegistrationStore`](crate::services::RegistrationStore) adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Connectivity, pool exhaustion or timeouts.
    #[error("datastore unavailable: {0}")]
    Unavailable(String),

    /// The datastore refused the read or write.
    #[error("datastore rejected the operation: {0}")]
    Rejected(String),
}

impl From<StoreError> for RegistrationError {
    fn from(err: StoreError) -> Self {
        RegistrationError::PersistenceFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = RegistrationError::MissingField("name");
        assert_eq!(err.to_string(), "All fields are required: name is missing");
    }

    #[test]
    fn test_client_errors() {
        assert!(RegistrationError::MissingField("age").is_client_error());
        assert!(RegistrationError::InvalidPhone("bad".into()).is_client_error());
        assert!(RegistrationError::InvalidAge("bad".into()).is_client_error());
        assert!(!RegistrationError::PersistenceFailure("down".into()).is_client_error());
        assert!(!RegistrationError::InvalidTimestamp("x".into()).is_client_error());
    }

    #[test]
    fn test_reason_codes() {
        assert_eq!(RegistrationError::MissingField("name").reason(), "missing_field");
        assert_eq!(
            RegistrationError::InvalidPhone(String::new()).reason(),
            "invalid_phone"
        );
        assert_eq!(RegistrationError::InvalidAge(String::new()).reason(), "invalid_age");
        assert_eq!(
            RegistrationError::PersistenceFailure(String::new()).reason(),
            "persistence_failure"
        );
    }

    #[test]
    fn test_store_error_converts_to_persistence_failure() {
        let err: RegistrationError = StoreError::Unavailable("pool timed out".into()).into();
        assert_eq!(
            err,
            RegistrationError::PersistenceFailure(
                "datastore unavailable: pool timed out".to_string()
            )
        );
    }
}
