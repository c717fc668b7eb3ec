//! Shared utilities for the event registration backend.
//!
//! This crate provides field-level validation used by the domain layer:
//! - Phone number normalization
//! - Age parsing and range checks
//! - Blank-text detection

pub mod validation;
