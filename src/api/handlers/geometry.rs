//! Handlers for the circle and triangle endpoints.
//!
//! Each endpoint accepts its JSON body on both `GET` and `POST` and answers
//! with a bare JSON number. Inputs whose result overflows `f64` are rejected,
//! since JSON has no encoding for infinity.

use axum::Json;

use crate::api::dto::geometry::{AreaRequest, CircumferenceRequest, RadiusRequest};
use crate::api::dto::required;
use crate::api::extract::ValidatedJson;
use crate::application::services::geometry;
use crate::error::{AppError, SCHEMA_KEY};

pub const OUT_OF_RANGE: &str = "Result is out of range.";

fn finite(result: f64, field: &str) -> Result<Json<f64>, AppError> {
    if result.is_finite() {
        Ok(Json(result))
    } else {
        Err(AppError::invalid_field(field, OUT_OF_RANGE))
    }
}

/// Circumference from radius.
///
/// # Endpoint
///
/// `GET|POST /api/v1/math/circle/circumference` with `{"radius": 6.2}`
///
/// # Errors
///
/// Returns 400 Bad Request if `radius` is missing, not a number, or so large
/// the result overflows.
pub async fn circumference_handler(
    ValidatedJson(payload): ValidatedJson<CircumferenceRequest>,
) -> Result<Json<f64>, AppError> {
    let radius = required(payload.radius, "radius")?;
    finite(geometry::circumference(radius), "radius")
}

/// Radius from circumference.
///
/// # Endpoint
///
/// `GET|POST /api/v1/math/circle/radius` with `{"circumference": 5}`
///
/// # Errors
///
/// Returns 400 Bad Request if `circumference` is missing or not a number.
pub async fn radius_handler(
    ValidatedJson(payload): ValidatedJson<RadiusRequest>,
) -> Result<Json<f64>, AppError> {
    let circumference = required(payload.circumference, "circumference")?;
    finite(geometry::radius(circumference), "circumference")
}

/// Triangle area from base and height.
///
/// # Endpoint
///
/// `GET|POST /api/v1/math/triangle/area` with `{"base": 6, "height": 4}`
///
/// # Errors
///
/// Returns 400 Bad Request if either field is missing or not a number, or
/// (under `_schema`) if the product overflows.
pub async fn area_handler(
    ValidatedJson(payload): ValidatedJson<AreaRequest>,
) -> Result<Json<f64>, AppError> {
    let base = required(payload.base, "base")?;
    let height = required(payload.height, "height")?;
    finite(geometry::triangle_area(base, height), SCHEMA_KEY)
}
