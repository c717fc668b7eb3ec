//! Registration endpoint handlers.

use axum::{extract::State, http::StatusCode, Extension, Json};
use domain::RegistrationError;
use domain::models::{
    ListRegistrationsResponse, RegisterResponse, RegistrationInput, RegistrationSummaryResponse,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::middleware::RequestId;
use crate::middleware::metrics::{
    record_persistence_failure, record_registration_created, record_registration_rejected,
};

const REGISTERED_MESSAGE: &str = "Registration submitted successfully";

/// Submit a registration and receive a ticket.
///
/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    ApiJson(input): ApiJson<RegistrationInput>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    match state.registrations.register(&input).await {
        Ok(outcome) => {
            record_registration_created();
            Ok((
                StatusCode::CREATED,
                Json(RegisterResponse {
                    success: true,
                    message: REGISTERED_MESSAGE.to_string(),
                    ticket: outcome.ticket,
                    data: vec![outcome.record],
                }),
            ))
        }
        Err(err) => {
            if err.is_client_error() {
                tracing::info!(
                    request_id = %request_id,
                    reason = err.reason(),
                    error = %err,
                    "Registration rejected"
                );
                record_registration_rejected(err.reason());
            } else {
                tracing::error!(
                    request_id = %request_id,
                    reason = err.reason(),
                    "Registration failed"
                );
                if matches!(err, RegistrationError::PersistenceFailure(_)) {
                    record_persistence_failure("insert");
                }
            }
            Err(ApiError::from_registration(err))
        }
    }
}

/// List all registrations, newest first.
///
/// GET /api/register
pub async fn list_registrations(
    State(state): State<AppState>,
) -> Result<Json<ListRegistrationsResponse>, ApiError> {
    let records = state.registrations.list_all().await.map_err(|err| {
        record_persistence_failure("list");
        ApiError::from_listing(err)
    })?;

    Ok(Json(ListRegistrationsResponse {
        success: true,
        count: records.len(),
        data: records,
    }))
}

/// Dashboard totals: count, latest registration time and average age.
///
/// GET /api/register/summary
pub async fn registration_summary(
    State(state): State<AppState>,
) -> Result<Json<RegistrationSummaryResponse>, ApiError> {
    let summary = state.registrations.summary().await.map_err(|err| {
        record_persistence_failure("list");
        ApiError::from_listing(err)
    })?;

    Ok(Json(RegistrationSummaryResponse {
        success: true,
        summary,
    }))
}
