//! Input validation helpers
//!
//! Centralized text length constants and validation functions shared by
//! the handlers, plus the bridge from `validator` derive errors.

use serde_json::{Map, Value};
use shared::AppError;
use validator::{Validate, ValidationErrors};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: brand, customer, product, plan, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions, campaign messages
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone, codes, dates, color hex, etc.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords
pub const MAX_PASSWORD_LEN: usize = 128;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")).with_detail("field", field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that a number is finite and within `min..=max`.
pub fn validate_range(value: f64, field: &str, min: f64, max: f64) -> Result<(), AppError> {
    if !(min..=max).contains(&value) {
        return Err(
            AppError::validation(format!("{field} must be between {min} and {max}"))
                .with_detail("field", field),
        );
    }
    Ok(())
}

/// Run `validator` derive rules and map failures to a `ValidationFailed` error.
///
/// The first message becomes the error message; every failing field is
/// listed under the `fields` detail.
pub fn validate_request<T: Validate>(request: &T) -> Result<(), AppError> {
    request.validate().map_err(into_app_error)
}

fn into_app_error(errors: ValidationErrors) -> AppError {
    let mut fields = Map::new();
    let mut first_message = None;

    let mut field_errors: Vec<_> = errors.field_errors().into_iter().collect();
    field_errors.sort_by(|a, b| a.0.cmp(&b.0));

    for (field, errs) in field_errors {
        let messages: Vec<Value> = errs
            .iter()
            .map(|e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                Value::String(msg)
            })
            .collect();
        if first_message.is_none() {
            first_message = messages.first().and_then(|m| m.as_str()).map(String::from);
        }
        fields.insert(field.to_string(), Value::Array(messages));
    }

    AppError::validation(first_message.unwrap_or_else(|| "Validation failed".into()))
        .with_detail("fields", Value::Object(fields))
}
