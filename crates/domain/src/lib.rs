//! Domain layer for the event registration backend.
//!
//! This crate contains:
//! - Domain models (registration input and records, tickets)
//! - Business logic services (validation, ticket ids, registration)
//! - Domain error types

pub mod error;
pub mod models;
pub mod services;

pub use error::{RegistrationError, StoreError};
