//! Input validation helpers
//!
//! Text length limits shared by every handler that accepts free text.

use crate::utils::AppError;

/// Names: devotees, donors, volunteers, pandits, zones
pub const MAX_NAME_LEN: usize = 200;

/// Display messages, schedule events, chat text
pub const MAX_NOTE_LEN: usize = 500;

/// Short values: phone numbers, dates, times
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    validate_max_len(value, field, max_len)
}

/// Validate only the length limit; blank values pass.
pub fn validate_max_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_max_len(v, field, max_len),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Rajesh", "devoteeName", MAX_NAME_LEN).is_ok());

        let err = validate_required_text("   ", "devoteeName", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let long = "x".repeat(MAX_SHORT_TEXT_LEN + 1);
        let err = validate_required_text(&long, "phoneNumber", MAX_SHORT_TEXT_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "pandit", MAX_NAME_LEN).is_ok());
        assert!(validate_optional_text(&Some("x".repeat(10)), "pandit", MAX_NAME_LEN).is_ok());
        assert!(validate_optional_text(&Some("x".repeat(300)), "pandit", MAX_NAME_LEN).is_err());
    }
}
