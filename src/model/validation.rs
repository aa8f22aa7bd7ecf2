//! Submit-time input checks.
//!
//! Only presence and shape are checked here; business rules belong to the
//! backend.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("EMAIL_REGEX is a valid regex literal")
});

/// A draft that cannot be submitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be a valid e-mail address")]
    InvalidEmail { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: &'static str, min: i64, max: i64 },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("Invalid {field} '{value}'. Allowed: {allowed:?}")]
    InvalidChoice {
        field: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },
}

/// Trim `value` in place and reject it if nothing is left.
pub fn require(field: &'static str, value: &mut String) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
    Ok(())
}

/// Required field that must also look like an e-mail address.
pub fn require_email(field: &'static str, value: &mut String) -> Result<(), ValidationError> {
    require(field, value)?;
    if EMAIL_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail { field })
    }
}

/// Turn blank optional text into `None`, trimming what remains.
pub fn blank_to_none(value: &mut Option<String>) {
    if let Some(text) = value.as_deref().map(str::trim) {
        *value = if text.is_empty() { None } else { Some(text.to_string()) };
    }
}

pub fn require_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange { field, min, max })
    }
}

/// Reject negative (and NaN) amounts.
pub fn require_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::Negative { field })
    }
}

/// Case-insensitive lookup of `value` in a closed set.
pub fn parse_choice<T: Copy>(
    field: &'static str,
    value: &str,
    all: &[T],
    wire: fn(T) -> &'static str,
) -> Result<T, ValidationError> {
    let wanted = value.trim();
    all.iter()
        .copied()
        .find(|candidate| wire(*candidate).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ValidationError::InvalidChoice {
            field,
            value: value.to_string(),
            allowed: all.iter().map(|candidate| wire(*candidate)).collect(),
        })
}
