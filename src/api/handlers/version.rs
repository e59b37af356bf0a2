//! Handler for the version endpoint.

use axum::{Json, extract::State, http::HeaderMap};

use crate::api::dto::version::VersionResponse;
use crate::state::AppState;

/// Request header selecting the response format.
pub const VERSION_HEADER: &str = "version";

/// Returns the API version.
///
/// # Endpoint
///
/// `GET /api/v1/version`
///
/// # Response
///
/// - `Version: 1` → `"1.0"`
/// - any other value, or no header → `{"major_version": "1", "minor_version": "0"}`
pub async fn version_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<VersionResponse> {
    let selector = headers
        .get(VERSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim);

    match selector {
        Some("1") => Json(VersionResponse::dotted(&state.version)),
        _ => Json(VersionResponse::structured(&state.version)),
    }
}
