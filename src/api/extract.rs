//! Request body extractors that run schema validation before the handler.
//!
//! Both extractors read the raw body, parse it as JSON, deserialize it while
//! tracking the field path of the first type error, and then run the
//! `validator` rules. Any failure becomes a `400` with a field → messages
//! report, so handlers only ever see valid input.
//!
//! - [`ValidatedJson`] - a single JSON object
//! - [`ValidatedBatch`] - a JSON array of objects; paths are prefixed with
//!   the item index (`[2].age`) and the whole batch is rejected if any item
//!   fails
//!
//! [`PathId`] does the same for the integer `{id}` path segment.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::api::dto::coerce::NOT_AN_INTEGER;
use crate::error::{AppError, FieldErrors, SCHEMA_KEY, collect_validation_errors};

/// Validated single-object body.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

/// Validated array body.
#[derive(Debug)]
pub struct ValidatedBatch<T>(pub Vec<T>);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = read_json(req, state).await?;
        let payload: T = deserialize(value)?;
        payload.validate()?;
        Ok(Self(payload))
    }
}

impl<S, T> FromRequest<S> for ValidatedBatch<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = read_json(req, state).await?;
        let items: Vec<T> = deserialize(value)?;

        let mut report = FieldErrors::new();
        for (idx, item) in items.iter().enumerate() {
            if let Err(errors) = item.validate() {
                collect_validation_errors(&errors, &format!("[{idx}]"), &mut report);
            }
        }

        if !report.is_empty() {
            tracing::debug!(errors = report.len(), "Batch rejected by validation");
            return Err(AppError::invalid(report));
        }

        Ok(Self(items))
    }
}

/// The `{id}` path segment. A non-integer segment is reported on `id`.
#[derive(Debug)]
pub struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e.body_text(), "Rejected path id");
                AppError::invalid_field("id", NOT_AN_INTEGER)
            })?;
        Ok(Self(id))
    }
}

async fn read_json<S>(req: Request, state: &S) -> Result<Value, AppError>
where
    S: Send + Sync,
{
    let bytes = Bytes::from_request(req, state)
        .await
        .map_err(|e| AppError::invalid_field(SCHEMA_KEY, e.body_text()))?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::invalid_field(SCHEMA_KEY, "No input data provided."));
    }

    serde_json::from_slice(&bytes)
        .map_err(|e| AppError::invalid_field(SCHEMA_KEY, format!("Invalid JSON: {e}")))
}

/// Deserializes `value`, reporting the first type error under its field path.
fn deserialize<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    serde_path_to_error::deserialize(value).map_err(|err| {
        let path = err.path().to_string();
        let field = if path == "." { SCHEMA_KEY.to_string() } else { path };
        AppError::invalid_field(field, err.into_inner().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Probe {
        #[validate(range(min = 0, max = 10, message = "too big"))]
        n: i64,
    }

    fn request(body: &'static str) -> Request {
        Request::builder()
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn details(err: AppError) -> Value {
        err.to_error_info().details
    }

    #[tokio::test]
    async fn test_valid_object() {
        let ValidatedJson(probe) = ValidatedJson::<Probe>::from_request(request(r#"{"n": 3}"#), &())
            .await
            .unwrap();
        assert_eq!(probe.n, 3);
    }

    #[tokio::test]
    async fn test_empty_body() {
        let err = ValidatedJson::<Probe>::from_request(request(""), &())
            .await
            .unwrap_err();
        assert_eq!(details(err)["_schema"][0], "No input data provided.");
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let err = ValidatedJson::<Probe>::from_request(request("{nope"), &())
            .await
            .unwrap_err();
        assert!(
            details(err)["_schema"][0]
                .as_str()
                .unwrap()
                .starts_with("Invalid JSON")
        );
    }

    #[tokio::test]
    async fn test_type_error_reports_field_path() {
        let err = ValidatedJson::<Probe>::from_request(request(r#"{"n": "x"}"#), &())
            .await
            .unwrap_err();
        assert!(details(err).get("n").is_some());
    }

    #[tokio::test]
    async fn test_batch_reports_every_invalid_item() {
        let err = ValidatedBatch::<Probe>::from_request(
            request(r#"[{"n": 1}, {"n": 11}, {"n": 2}, {"n": 12}]"#),
            &(),
        )
        .await
        .unwrap_err();

        let details = details(err);
        assert_eq!(details["[1].n"][0], "too big");
        assert_eq!(details["[3].n"][0], "too big");
        assert!(details.get("[0].n").is_none());
    }

    #[tokio::test]
    async fn test_batch_type_error_path_includes_index() {
        let err = ValidatedBatch::<Probe>::from_request(request(r#"[{"n": 1}, {"n": true}]"#), &())
            .await
            .unwrap_err();
        assert!(details(err).get("[1].n").is_some());
    }

    #[tokio::test]
    async fn test_batch_requires_array() {
        let err = ValidatedBatch::<Probe>::from_request(request(r#"{"n": 1}"#), &())
            .await
            .unwrap_err();
        assert!(details(err).get("_schema").is_some());
    }
}
