//! Application error type and its HTTP rendering.
//!
//! Two kinds of failure reach clients:
//!
//! - **Validation** (`400 Bad Request`) with a field → messages report
//! - **Unauthorized** (`401 Unauthorized`) with an empty body and a
//!   `WWW-Authenticate` challenge
//!
//! Field paths in the report use the top-level field name (`radius`),
//! `[<index>].<field>` for items of a batch body, and `_schema` for problems
//! that belong to the body or item as a whole.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Field path → messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Key used for errors that are not tied to a single field.
pub const SCHEMA_KEY: &str = "_schema";

/// Message reported for absent required fields.
pub const MISSING_FIELD: &str = "Missing data for required field.";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("unauthorized")]
    Unauthorized { challenge: &'static str },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    /// Validation failure carrying a structured field report.
    pub fn invalid(errors: FieldErrors) -> Self {
        Self::bad_request("Validation failed", json!(errors))
    }

    /// Validation failure for a single field.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![message.into()]);
        Self::invalid(errors)
    }

    /// Rejection for batch items whose `id` matched no record.
    ///
    /// `missing` holds `(position in the request, id)` pairs.
    pub fn unknown_users(missing: &[(usize, i64)]) -> Self {
        let errors = missing
            .iter()
            .map(|(idx, id)| (format!("[{idx}].id"), vec![unknown_user_message(*id)]))
            .collect();
        Self::invalid(errors)
    }

    pub fn unauthorized(challenge: &'static str) -> Self {
        Self::Unauthorized { challenge }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { message, details } => ErrorInfo {
                code: "validation_error",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Unauthorized { .. } => ErrorInfo {
                code: "unauthorized",
                message: "Unauthorized".to_string(),
                details: json!({}),
            },
        }
    }
}

pub fn unknown_user_message(id: i64) -> String {
    format!("No user with id {id}.")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized { challenge } => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, challenge)],
            )
                .into_response(),
            AppError::Validation { .. } => {
                let body = ErrorBody {
                    error: self.to_error_info(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut report = FieldErrors::new();
        collect_validation_errors(&errors, "", &mut report);
        AppError::invalid(report)
    }
}

/// Flattens nested `validator` errors into `report`, prefixing every path
/// with `prefix`.
pub fn collect_validation_errors(errors: &ValidationErrors, prefix: &str, report: &mut FieldErrors) {
    for (field, kind) in errors.errors() {
        let field: &str = field.as_ref();
        let name = if field == "__all__" { SCHEMA_KEY } else { field };
        let path = join_path(prefix, name);

        match kind {
            ValidationErrorsKind::Field(errs) => {
                report
                    .entry(path)
                    .or_default()
                    .extend(errs.iter().map(error_message));
            }
            ValidationErrorsKind::Struct(inner) => collect_validation_errors(inner, &path, report),
            ValidationErrorsKind::List(items) => {
                for (idx, inner) in items {
                    collect_validation_errors(inner, &format!("{path}[{idx}]"), report);
                }
            }
        }
    }
}

fn join_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}

fn error_message(error: &ValidationError) -> String {
    match (&error.message, error.code.as_ref()) {
        (Some(message), _) => message.to_string(),
        (None, "required") => MISSING_FIELD.to_string(),
        (None, code) => format!("Invalid value ({code})."),
    }
}
