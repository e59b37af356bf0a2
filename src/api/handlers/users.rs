//! Handlers for the user-collection resource, `/api/v1/user`.
//!
//! Every body is a JSON array. A failure on any item, whether a schema rule
//! or an unknown id, rejects the whole request and nothing is applied.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::user::{UserCreateItem, UserIdItem, UserItem, UserUpdateItem, collect_ids};
use crate::api::extract::ValidatedBatch;
use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

fn to_items(users: Vec<User>) -> Json<Vec<UserItem>> {
    Json(users.into_iter().map(UserItem::from).collect())
}

/// Returns several users in request order.
///
/// # Endpoint
///
/// `GET /api/v1/user` with `[{"id": 0}, {"id": 2}]`
///
/// # Errors
///
/// Returns 400 Bad Request if any item is invalid or any id is unknown.
pub async fn get_users_handler(
    State(state): State<AppState>,
    ValidatedBatch(items): ValidatedBatch<UserIdItem>,
) -> Result<Json<Vec<UserItem>>, AppError> {
    let ids = collect_ids(items)?;
    let users = state.user_service.get_users(ids).await?;
    Ok(to_items(users))
}

/// Removes several users and returns them.
///
/// # Endpoint
///
/// `DELETE /api/v1/user` with `[{"id": 0}, {"id": 2}]`
///
/// # Errors
///
/// Returns 400 Bad Request if any item is invalid or any id is unknown.
pub async fn delete_users_handler(
    State(state): State<AppState>,
    ValidatedBatch(items): ValidatedBatch<UserIdItem>,
) -> Result<Json<Vec<UserItem>>, AppError> {
    let ids = collect_ids(items)?;
    let users = state.user_service.delete_users(ids).await?;
    Ok(to_items(users))
}

/// Updates several users.
///
/// # Endpoint
///
/// `PUT /api/v1/user`
///
/// # Request Body
///
/// ```json
/// [
///   { "id": 0, "name": "Johnny" },
///   { "id": 1, "age": 42 }
/// ]
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if:
/// - an item has neither `name` nor `age`
/// - a `name` contains a space
/// - an `age` is outside `0..=100`
/// - an id is unknown
pub async fn update_users_handler(
    State(state): State<AppState>,
    ValidatedBatch(items): ValidatedBatch<UserUpdateItem>,
) -> Result<Json<Vec<UserItem>>, AppError> {
    let patches = items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| item.into_patch(idx))
        .collect::<Result<Vec<_>, _>>()?;

    let users = state.user_service.update_users(patches).await?;
    Ok(to_items(users))
}

/// Creates users with freshly assigned ids.
///
/// # Endpoint
///
/// `POST /api/v1/user`
///
/// # Request Body
///
/// ```json
/// [ { "name": "Rune", "age": 29 } ]
/// ```
///
/// Ids continue from the current maximum, one per item in input order.
///
/// # Errors
///
/// Returns 400 Bad Request if any item lacks `name` or `age`.
pub async fn create_users_handler(
    State(state): State<AppState>,
    ValidatedBatch(items): ValidatedBatch<UserCreateItem>,
) -> Result<(StatusCode, Json<Vec<UserItem>>), AppError> {
    let new_users = items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| item.into_new_user(idx))
        .collect::<Result<Vec<_>, _>>()?;

    let users = state.user_service.create_users(new_users).await?;
    Ok((StatusCode::CREATED, to_items(users)))
}
