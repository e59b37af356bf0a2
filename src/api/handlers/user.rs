//! Handlers for the single-user resource, `/api/v1/user/{id}`.

use axum::{Json, extract::State};

use crate::api::dto::user::{UserItem, UserPatchRequest};
use crate::api::extract::{PathId, ValidatedJson};
use crate::error::AppError;
use crate::state::AppState;

/// Returns one user.
///
/// # Endpoint
///
/// `GET /api/v1/user/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not an integer or no user has it.
pub async fn get_user_handler(
    PathId(id): PathId,
    State(state): State<AppState>,
) -> Result<Json<UserItem>, AppError> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user.into()))
}

/// Removes one user and returns the removed record.
///
/// # Endpoint
///
/// `DELETE /api/v1/user/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if no user has this id. Deleting twice fails the
/// second time.
pub async fn delete_user_handler(
    PathId(id): PathId,
    State(state): State<AppState>,
) -> Result<Json<UserItem>, AppError> {
    let user = state.user_service.delete_user(id).await?;
    Ok(Json(user.into()))
}

/// Merges the body into one user.
///
/// # Endpoint
///
/// `PUT /api/v1/user/{id}`
///
/// # Request Body
///
/// ```json
/// { "name": "Steven", "age": 42 }
/// ```
///
/// Both fields are optional. The record's id never changes.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or no user has this id.
pub async fn update_user_handler(
    PathId(id): PathId,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserPatchRequest>,
) -> Result<Json<UserItem>, AppError> {
    let user = state.user_service.update_user(id, payload.into()).await?;
    Ok(Json(user.into()))
}
