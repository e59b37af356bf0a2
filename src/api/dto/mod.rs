//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Request DTOs keep every field optional at the serde
//! level and enforce presence with `#[validate(required)]`, so a missing
//! field is reported under its own name instead of failing the whole body.

pub mod coerce;
pub mod geometry;
pub mod health;
pub mod user;
pub mod version;

use crate::error::{AppError, MISSING_FIELD};

/// Unwraps a field that validation has already marked as required.
///
/// # Errors
///
/// Returns [`AppError::Validation`] on `field` if the value is absent.
pub fn required<T>(value: Option<T>, field: impl Into<String>) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::invalid_field(field, MISSING_FIELD))
}
