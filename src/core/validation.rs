//! Input validation for ghkit operations.
//!
//! Rejects inputs the platform would refuse before anything is sent.

use crate::core::constants::RESERVED_SECRET_PREFIX;
use crate::error::{Result, ValidationError};

/// Validate a repository secret name.
///
/// Secret names must:
/// - Only contain A-Z, a-z, 0-9, and underscore
/// - Not start with a digit
/// - Not start with the reserved `GITHUB_` prefix (case-insensitive)
/// - Not be empty
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_secret_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptySecretName.into());
    }

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid(name, "cannot start with a digit".to_string()));
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(invalid(
                name,
                format!(
                    "invalid character '{}' at position {}. Only alphanumerics and underscore are allowed",
                    ch,
                    i + 1
                ),
            ));
        }
    }

    if name
        .to_ascii_uppercase()
        .starts_with(RESERVED_SECRET_PREFIX)
    {
        return Err(invalid(
            name,
            format!("the {} prefix is reserved", RESERVED_SECRET_PREFIX),
        ));
    }

    Ok(())
}

/// Validate a value supplied on the command line or stdin.
///
/// # Errors
///
/// Returns `ValidationError::EmptyValue` if the value is empty.
pub fn validate_value(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::EmptyValue(name.to_string()).into());
    }
    Ok(())
}

fn invalid(name: &str, reason: String) -> crate::error::Error {
    ValidationError::InvalidSecretName {
        name: name.to_string(),
        reason,
    }
    .into()
}
