//! User CRUD service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::{AppError, unknown_user_message};

/// Service for reading and mutating the user list.
///
/// Unknown ids are reported as validation failures on the `id` field
/// rather than as 404s.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves a single user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if no user has this id.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| unknown_user(id))
    }

    /// Merges `patch` into a single user. The id never changes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if no user has this id.
    pub async fn update_user(&self, id: i64, patch: UserPatch) -> Result<User, AppError> {
        let user = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| unknown_user(id))?;

        tracing::info!(user_id = id, "User updated");
        Ok(user)
    }

    /// Removes a single user and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if no user has this id, including
    /// when it was already deleted.
    pub async fn delete_user(&self, id: i64) -> Result<User, AppError> {
        let user = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| unknown_user(id))?;

        tracing::info!(user_id = id, "User deleted");
        Ok(user)
    }

    /// Retrieves several users in request order.
    pub async fn get_users(&self, ids: Vec<i64>) -> Result<Vec<User>, AppError> {
        self.repository.find_many(ids).await
    }

    /// Applies a batch of patches. Nothing is changed if any id is unknown.
    pub async fn update_users(&self, patches: Vec<(i64, UserPatch)>) -> Result<Vec<User>, AppError> {
        let users = self.repository.update_many(patches).await?;
        tracing::info!(count = users.len(), "Users updated");
        Ok(users)
    }

    /// Removes a batch of users. Nothing is removed if any id is unknown.
    pub async fn delete_users(&self, ids: Vec<i64>) -> Result<Vec<User>, AppError> {
        let users = self.repository.delete_many(ids).await?;
        tracing::info!(count = users.len(), "Users deleted");
        Ok(users)
    }

    /// Creates a batch of users with freshly assigned sequential ids.
    pub async fn create_users(&self, new_users: Vec<NewUser>) -> Result<Vec<User>, AppError> {
        let users = self.repository.create_many(new_users).await?;
        tracing::info!(
            count = users.len(),
            first_id = users.first().map(|u| u.id),
            "Users created"
        );
        Ok(users)
    }

    /// Number of stored users.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}

fn unknown_user(id: i64) -> AppError {
    AppError::invalid_field("id", unknown_user_message(id))
}
