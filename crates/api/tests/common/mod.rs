//! Common test utilities for integration tests.
//!
//! The router is built on the in-memory registration store, so these tests
//! run without a database. `postgres_integration` covers the SQL adapter.

// Allow dead code in this module - not every helper is used by every test binary.
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use domain::services::{InMemoryRegistrationStore, RegistrationStore};
use event_registration_api::{app::create_app_with_store, config::Config};
use fake::{faker::name::en::FirstName, Fake};

/// Test configuration built from embedded defaults.
pub fn test_config() -> Config {
    Config::load_for_test(&[("logging.level", "debug"), ("logging.format", "pretty")])
        .expect("Failed to load test config")
}

/// Build the router over an in-memory store.
pub fn create_test_app(config: Config) -> (Router, Arc<InMemoryRegistrationStore>) {
    let store = Arc::new(InMemoryRegistrationStore::new());
    let app = create_test_app_with_store(config, store.clone());
    (app, store)
}

pub fn create_test_app_with_store(config: Config, store: Arc<dyn RegistrationStore>) -> Router {
    create_app_with_store(config, store).expect("Failed to build test app")
}

/// Registration payload for a random attendee.
pub fn registration_payload() -> serde_json::Value {
    let name: String = FirstName().fake();
    serde_json::json!({
        "name": name,
        "phoneNumber": "9876543210",
        "age": (18..80).fake::<u8>().to_string(),
    })
}

/// Build a JSON request.
pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a request with a raw body, for malformed payloads.
pub fn raw_request(method: Method, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Parse response body as JSON.
pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}
