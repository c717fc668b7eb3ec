//! Common validation utilities for registration fields.

use validator::ValidationError;

/// Number of digits a phone number must contain after normalization.
pub const PHONE_NUMBER_DIGITS: usize = 10;

/// Youngest accepted registrant age.
pub const MIN_AGE: i64 = 1;

/// Oldest accepted registrant age.
pub const MAX_AGE: i64 = 120;

/// Returns true if the value is empty or only whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Strips every non-digit character and checks the remaining length.
///
/// `"98765-43210"` normalizes to `"9876543210"`.
pub fn normalize_phone_number(raw: &str) -> Result<String, ValidationError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == PHONE_NUMBER_DIGITS {
        Ok(digits)
    } else {
        let mut err = ValidationError::new("phone_number_length");
        err.message = Some("Phone number must be exactly 10 digits".into());
        err.add_param("digits".into(), &digits.len());
        Err(err)
    }
}

/// Parses a textual age. Surrounding whitespace is ignored.
pub fn parse_age_text(raw: &str) -> Result<i64, ValidationError> {
    raw.trim().parse::<i64>().map_err(|_| age_not_a_number())
}

/// Accepts a JSON number only if it is integral.
pub fn parse_age_number(number: &serde_json::Number) -> Result<i64, ValidationError> {
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }
    if number.as_u64().is_some() {
        // Larger than i64::MAX, certainly out of range.
        return Err(age_out_of_range());
    }
    Err(age_not_a_number())
}

/// Validates that an age is within the accepted range (1 to 120).
pub fn validate_age(age: i64) -> Result<i32, ValidationError> {
    if (MIN_AGE..=MAX_AGE).contains(&age) {
        // Range check above guarantees the value fits.
        Ok(age as i32)
    } else {
        Err(age_out_of_range())
    }
}

fn age_not_a_number() -> ValidationError {
    let mut err = ValidationError::new("age_not_integer");
    err.message = Some("Age must be a whole number".into());
    err
}

fn age_out_of_range() -> ValidationError {
    let mut err = ValidationError::new("age_range");
    err.message = Some("Age must be between 1 and 120".into());
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::number::en::NumberWithFormat;
    use fake::Fake;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank("Asha"));
        assert!(!is_blank("  a  "));
    }

    // Phone number tests
    #[test]
    fn test_normalize_phone_number_plain_digits() {
        assert_eq!(normalize_phone_number("9876543210").unwrap(), "9876543210");
    }

    #[test]
    fn test_normalize_phone_number_strips_separators() {
        assert_eq!(normalize_phone_number("98765-43210").unwrap(), "9876543210");
        assert_eq!(
            normalize_phone_number("(987) 654 3210").unwrap(),
            "9876543210"
        );
        assert_eq!(normalize_phone_number(" 98765 43210 ").unwrap(), "9876543210");
    }

    #[test]
    fn test_normalize_phone_number_wrong_length() {
        assert!(normalize_phone_number("12345").is_err());
        assert!(normalize_phone_number("123456789").is_err());
        assert!(normalize_phone_number("12345678901").is_err());
        assert!(normalize_phone_number("+91 98765 43210").is_err());
    }

    #[test]
    fn test_normalize_phone_number_no_digits() {
        let err = normalize_phone_number("not-a-number").unwrap_err();
        assert_eq!(err.code, "phone_number_length");
    }

    #[test]
    fn test_normalize_phone_number_error_message() {
        let err = normalize_phone_number("123").unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Phone number must be exactly 10 digits"
        );
    }

    #[test]
    fn test_normalize_phone_number_generated() {
        for _ in 0..20 {
            let phone: String = NumberWithFormat("^#########").fake();
            assert_eq!(normalize_phone_number(&phone).unwrap(), phone);
        }
    }

    // Age tests
    #[test]
    fn test_parse_age_text() {
        assert_eq!(parse_age_text("45").unwrap(), 45);
        assert_eq!(parse_age_text(" 29 ").unwrap(), 29);
        assert_eq!(parse_age_text("-3").unwrap(), -3);
        assert!(parse_age_text("abc").is_err());
        assert!(parse_age_text("29.5").is_err());
        assert!(parse_age_text("29abc").is_err());
    }

    #[test]
    fn test_parse_age_number() {
        let whole: serde_json::Number = 29.into();
        assert_eq!(parse_age_number(&whole).unwrap(), 29);

        let fraction = serde_json::Number::from_f64(29.5).unwrap();
        let err = parse_age_number(&fraction).unwrap_err();
        assert_eq!(err.code, "age_not_integer");

        let huge: serde_json::Number = u64::MAX.into();
        let err = parse_age_number(&huge).unwrap_err();
        assert_eq!(err.code, "age_range");
    }

    #[test]
    fn test_validate_age_bounds() {
        assert_eq!(validate_age(1).unwrap(), 1);
        assert_eq!(validate_age(45).unwrap(), 45);
        assert_eq!(validate_age(120).unwrap(), 120);
        assert!(validate_age(0).is_err());
        assert!(validate_age(121).is_err());
        assert!(validate_age(-1).is_err());
        assert!(validate_age(i64::MAX).is_err());
    }

    #[test]
    fn test_validate_age_error_message() {
        let err = validate_age(200).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Age must be between 1 and 120"
        );
    }
}
