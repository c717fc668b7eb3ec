use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::RegistrationError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed request: {0}")]
    BadRequest(String),

    /// Datastore failure. The first field is the client-facing message.
    #[error("Persistence error: {1}")]
    Persistence(&'static str, String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl ApiError {
    /// Maps a failed registration, keeping the client message for input errors.
    pub fn from_registration(err: RegistrationError) -> Self {
        match err {
            RegistrationError::PersistenceFailure(detail) => {
                ApiError::Persistence("Failed to save registration", detail)
            }
            RegistrationError::InvalidTimestamp(detail) => ApiError::Internal(detail),
            client => ApiError::Validation(client.to_string()),
        }
    }

    /// Maps a failed listing.
    pub fn from_listing(err: RegistrationError) -> Self {
        match err {
            RegistrationError::PersistenceFailure(detail) => {
                ApiError::Persistence("Failed to fetch registrations", detail)
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Persistence(public, detail) => {
                tracing::error!("Persistence error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "persistence_error",
                    (*public).to_string(),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error".into(),
                )
            }
            ApiError::ServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "service_unavailable",
                msg.clone(),
            ),
        };

        let body = ErrorBody {
            error: message,
            code,
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
