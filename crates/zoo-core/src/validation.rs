//! Field validation for zoo entities.
//!
//! Every constructor in the crate runs its inputs through these checks
//! before building a value, so no partially valid entity can exist.
//! Enumerated fields are trimmed and lowercased before matching and the
//! canonical value is returned.

use chrono::NaiveDate;

use crate::error::{ZooError, ZooResult};
use crate::models::{Environment, Issue, Severity};

/// Oldest age accepted for an animal.
pub const MAX_AGE: i64 = 250;

/// Date format used by health records (e.g. 25/12/2024).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Check that a string is non-empty after trimming; returns the trimmed value.
pub fn validate_string<'a>(value: &'a str, field: &str) -> ZooResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ZooError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed)
}

/// Check an animal age: non-negative and at most [`MAX_AGE`].
pub fn validate_age(value: i64) -> ZooResult<u8> {
    if value < 0 {
        return Err(ZooError::Validation("age cannot be negative".into()));
    }
    if value > MAX_AGE {
        return Err(ZooError::Validation(format!(
            "age {} seems unrealistic (over {})",
            value, MAX_AGE
        )));
    }
    u8::try_from(value).map_err(|_| ZooError::Validation(format!("age {} out of range", value)))
}

/// Parse a textual boolean flag ("true"/"false", case-insensitive).
pub fn validate_bool(value: &str, field: &str) -> ZooResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ZooError::Validation(format!(
            "{} must be a boolean, got '{}'",
            field,
            value.trim()
        ))),
    }
}

/// Normalize and check an environment name.
pub fn validate_environment(value: &str, field: &str) -> ZooResult<Environment> {
    value.parse().map_err(|_| {
        ZooError::Validation(format!(
            "{} must be one of [{}]",
            field,
            Environment::choices()
        ))
    })
}

/// Normalize and check a severity level (low, medium, high).
pub fn validate_level(value: &str, field: &str) -> ZooResult<Severity> {
    validate_string(value, field)?;
    value.parse().map_err(|_| {
        ZooError::Validation(format!("{} must be one of [low, medium, high]", field))
    })
}

/// Normalize and check a health issue category.
pub fn validate_issue(value: &str, field: &str) -> ZooResult<Issue> {
    value.parse().map_err(|_| {
        ZooError::Validation(format!(
            "{} must be one of [injuries, illness, behavioral concerns]",
            field
        ))
    })
}

/// Parse a DD/MM/YYYY date.
pub fn validate_date(value: &str, field: &str) -> ZooResult<NaiveDate> {
    let trimmed = validate_string(value, field)?;
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| {
        ZooError::Validation(format!(
            "{} must be in format DD/MM/YYYY (e.g., 25/12/2024)",
            field
        ))
    })
}

/// Check an enclosure size: a strictly positive number of square metres.
pub fn validate_size(value: i64) -> ZooResult<u32> {
    if value <= 0 {
        return Err(ZooError::Validation("size must be a positive integer".into()));
    }
    u32::try_from(value).map_err(|_| ZooError::Validation(format!("size {} is too large", value)))
}
