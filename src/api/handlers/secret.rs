//! Handler for the gated secret endpoints.

use axum::Json;

/// The value behind both authentication gates.
pub const SECRET: &str = "No one expects the spanish inquisition!";

/// Returns the secret.
///
/// # Endpoints
///
/// - `GET /api/v1/secret/basic` - behind [`crate::api::middleware::auth::basic_layer`]
/// - `GET /api/v1/secret/token` - behind [`crate::api::middleware::auth::token_layer`]
pub async fn secret_handler() -> Json<&'static str> {
    Json(SECRET)
}
