//! Repository trait for user data access.

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the user list.
///
/// Batch operations are all-or-nothing: when any requested id is unknown the
/// call fails with [`AppError::Validation`] (see [`AppError::unknown_users`])
/// and the store is left untouched.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - process-local list
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Returns the users with the given ids, in request order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any id is unknown.
    async fn find_many(&self, ids: Vec<i64>) -> Result<Vec<User>, AppError>;

    /// Merges `patch` into the user with `id`.
    ///
    /// Returns `Ok(None)` if no such user exists.
    async fn update(&self, id: i64, patch: UserPatch) -> Result<Option<User>, AppError>;

    /// Applies every `(id, patch)` pair and returns the updated users in request order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any id is unknown.
    async fn update_many(&self, patches: Vec<(i64, UserPatch)>) -> Result<Vec<User>, AppError>;

    /// Removes the user with `id`, returning the removed record.
    async fn delete(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Removes every listed user and returns the removed records in request order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any id is unknown.
    async fn delete_many(&self, ids: Vec<i64>) -> Result<Vec<User>, AppError>;

    /// Appends new users, assigning ids `max + 1`, `max + 2`, ... in input order.
    async fn create_many(&self, new_users: Vec<NewUser>) -> Result<Vec<User>, AppError>;

    /// Number of stored users.
    async fn count(&self) -> Result<usize, AppError>;
}
