//! Registration input validation.
//!
//! Rules are checked in a fixed order and the first failure wins:
//! presence of all fields, then phone number, then age.

use shared::validation::{is_blank, normalize_phone_number, validate_age};
use validator::ValidationError;

use crate::error::RegistrationError;
use crate::models::{NewRegistration, RegistrationInput};

/// Validates a form submission and returns the normalized registration.
pub fn validate(input: &RegistrationInput) -> Result<NewRegistration, RegistrationError> {
    let name = present(input.name.as_deref()).ok_or(RegistrationError::MissingField("name"))?;
    let phone = present(input.phone_number.as_deref())
        .ok_or(RegistrationError::MissingField("phoneNumber"))?;
    let age = input
        .age
        .as_ref()
        .filter(|age| !age.is_blank())
        .ok_or(RegistrationError::MissingField("age"))?;

    let phone_number =
        normalize_phone_number(phone).map_err(|e| RegistrationError::InvalidPhone(message(&e)))?;

    let age = age
        .parse()
        .and_then(validate_age)
        .map_err(|e| RegistrationError::InvalidAge(message(&e)))?;

    Ok(NewRegistration {
        name: name.trim().to_string(),
        phone_number,
        age,
    })
}

impl TryFrom<&RegistrationInput> for NewRegistration {
    type Error = RegistrationError;

    fn try_from(input: &RegistrationInput) -> Result<Self, Self::Error> {
        validate(input)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !is_blank(v))
}

fn message(err: &ValidationError) -> String {
    err.message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| err.code.to_string())
}
