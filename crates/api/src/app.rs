use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use domain::services::{RegistrationService, RegistrationStore, TicketIdGenerator};
use persistence::repositories::RegistrationRepository;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{Config, ConfigValidationError};
use crate::middleware::{
    metrics_handler, metrics_middleware, security_headers_middleware, trace_id,
};
use crate::routes::{health, registrations};

#[derive(Clone)]
pub struct AppState {
    pub registrations: RegistrationService,
    pub config: Arc<Config>,
}

/// Build the application backed by PostgreSQL.
pub fn create_app(config: Config, pool: PgPool) -> Result<Router, ConfigValidationError> {
    create_app_with_store(config, Arc::new(RegistrationRepository::new(pool)))
}

/// Build the application on top of any registration store.
pub fn create_app_with_store(
    config: Config,
    store: Arc<dyn RegistrationStore>,
) -> Result<Router, ConfigValidationError> {
    let config = Arc::new(config);

    let formatter = config.display_formatter()?;

    // One counter per process, shared by every request.
    let ticket_ids = Arc::new(TicketIdGenerator::new());

    let state = AppState {
        registrations: RegistrationService::new(store, ticket_ids, formatter),
        config: config.clone(),
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let registration_routes = Router::new()
        .route(
            "/api/register",
            post(registrations::register).get(registrations::list_registrations),
        )
        .route(
            "/api/register/summary",
            get(registrations::registration_summary),
        );

    // Public operational routes
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Ok(Router::new()
        .merge(public_routes)
        .merge(registration_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware)) // Prometheus metrics
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id)) // Request ID and logging
        .layer(cors)
        .with_state(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::services::InMemoryRegistrationStore;

    #[test]
    fn test_create_app_rejects_bad_offset() {
        let config = Config::load_for_test(&[("ticket.display_utc_offset_minutes", "100000")])
            .expect("Failed to load config");
        let store = Arc::new(InMemoryRegistrationStore::new());
        assert!(create_app_with_store(config, store).is_err());
    }

    #[test]
    fn test_create_app_rejects_offset_beyond_fourteen_hours() {
        // 16:40 is a valid FixedOffset but not a real zone offset.
        let config = Config::load_for_test(&[("ticket.display_utc_offset_minutes", "1000")])
            .expect("Failed to load config");
        let store = Arc::new(InMemoryRegistrationStore::new());
        assert!(create_app_with_store(config, store).is_err());
    }

    #[test]
    fn test_create_app_with_cors_origins() {
        let mut config = Config::load_for_test(&[]).expect("Failed to load config");
        config.security.cors_origins = vec![
            "https://events.example.com".to_string(),
            "not a header value\n".to_string(),
        ];
        let store = Arc::new(InMemoryRegistrationStore::new());
        assert!(create_app_with_store(config, store).is_ok());
    }
}
