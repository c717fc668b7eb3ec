//! Registration domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::ValidationError;

use super::ticket::Ticket;

/// Age as submitted by the form: either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeValue {
    Number(serde_json::Number),
    Text(String),
}

impl AgeValue {
    /// Blank text counts as absent. Numbers are never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            AgeValue::Number(_) => false,
            AgeValue::Text(text) => shared::validation::is_blank(text),
        }
    }

    /// Parses the value into a whole number without range checks.
    pub fn parse(&self) -> Result<i64, ValidationError> {
        match self {
            AgeValue::Number(number) => shared::validation::parse_age_number(number),
            AgeValue::Text(text) => shared::validation::parse_age_text(text),
        }
    }
}

impl From<&str> for AgeValue {
    fn from(value: &str) -> Self {
        AgeValue::Text(value.to_string())
    }
}

impl From<i64> for AgeValue {
    fn from(value: i64) -> Self {
        AgeValue::Number(value.into())
    }
}

/// Registration form submission, exactly as received.
///
/// Every field is optional on the wire so that absence can be reported
/// as a missing field rather than a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub age: Option<AgeValue>,
}

impl RegistrationInput {
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        age: impl Into<AgeValue>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            phone_number: Some(phone_number.into()),
            age: Some(age.into()),
        }
    }
}

/// A validated registration, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRegistration {
    pub name: String,
    /// Exactly ten ASCII digits.
    pub phone_number: String,
    pub age: i32,
}

/// A registration as stored by the datastore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RegistrationRecord {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
}

/// Aggregate figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationSummary {
    pub total: usize,
    pub latest_registration_at: Option<DateTime<Utc>>,
    /// Mean age rounded to the nearest whole year.
    pub average_age: Option<i64>,
}

impl RegistrationSummary {
    pub fn from_records(records: &[RegistrationRecord]) -> Self {
        let total = records.len();
        let latest_registration_at = records.iter().map(|r| r.created_at).max();
        let average_age = if total == 0 {
            None
        } else {
            let sum: i64 = records.iter().map(|r| i64::from(r.age)).sum();
            Some((sum as f64 / total as f64).round() as i64)
        };

        Self {
            total,
            latest_registration_at,
            average_age,
        }
    }
}

/// Response after a successful registration.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub ticket: Ticket,
    pub data: Vec<RegistrationRecord>,
}

/// Response for listing registrations.
#[derive(Debug, Clone, Serialize)]
pub struct ListRegistrationsResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<RegistrationRecord>,
}

/// Response for the dashboard summary.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationSummaryResponse {
    pub success: bool,
    #[serde(flatten)]
    pub summary: RegistrationSummary,
}
