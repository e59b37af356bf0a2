//! Process-local user store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUser, User, UserPatch, seed_users};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Ordered list of users guarded by a single lock.
///
/// Every batch call checks and applies under one write guard, so concurrent
/// requests never observe a half-applied batch or receive the same id.
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Store holding the three seed records.
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }
}

fn position(users: &[User], id: i64) -> Option<usize> {
    users.iter().position(|u| u.id == id)
}

/// Collects `(request index, id)` for every id with no record.
fn missing_ids(users: &[User], ids: impl Iterator<Item = i64>) -> Vec<(usize, i64)> {
    ids.enumerate()
        .filter(|(_, id)| position(users, *id).is_none())
        .collect()
}

fn next_id(users: &[User]) -> i64 {
    users.iter().map(|u| u.id).max().map_or(0, |max| max + 1)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_many(&self, ids: Vec<i64>) -> Result<Vec<User>, AppError> {
        let users = self.users.read().await;

        let missing = missing_ids(&users, ids.iter().copied());
        if !missing.is_empty() {
            return Err(AppError::unknown_users(&missing));
        }

        Ok(ids
            .iter()
            .filter_map(|id| users.iter().find(|u| u.id == *id).cloned())
            .collect())
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<Option<User>, AppError> {
        let mut users = self.users.write().await;
        Ok(users.iter_mut().find(|u| u.id == id).map(|user| {
            user.apply(&patch);
            user.clone()
        }))
    }

    async fn update_many(&self, patches: Vec<(i64, UserPatch)>) -> Result<Vec<User>, AppError> {
        let mut users = self.users.write().await;

        let missing = missing_ids(&users, patches.iter().map(|(id, _)| *id));
        if !missing.is_empty() {
            return Err(AppError::unknown_users(&missing));
        }

        let mut updated = Vec::with_capacity(patches.len());
        for (id, patch) in &patches {
            if let Some(user) = users.iter_mut().find(|u| u.id == *id) {
                user.apply(patch);
                updated.push(user.clone());
            }
        }

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<Option<User>, AppError> {
        let mut users = self.users.write().await;
        match position(&users, id) {
            Some(idx) => Ok(Some(users.remove(idx))),
            None => Ok(None),
        }
    }

    async fn delete_many(&self, ids: Vec<i64>) -> Result<Vec<User>, AppError> {
        let mut users = self.users.write().await;

        let missing = missing_ids(&users, ids.iter().copied());
        if !missing.is_empty() {
            return Err(AppError::unknown_users(&missing));
        }

        // Repeated ids remove (and report) the record once.
        let mut removed = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(idx) = position(&users, id) {
                removed.push(users.remove(idx));
            }
        }

        Ok(removed)
    }

    async fn create_many(&self, new_users: Vec<NewUser>) -> Result<Vec<User>, AppError> {
        let mut users = self.users.write().await;

        let mut id = next_id(&users);
        let mut created = Vec::with_capacity(new_users.len());
        for new_user in new_users {
            let user = User::new(id, new_user.name, new_user.age);
            users.push(user.clone());
            created.push(user);
            id += 1;
        }

        Ok(created)
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.users.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str, age: i64) -> NewUser {
        NewUser {
            name: name.to_string(),
            age,
        }
    }

    #[tokio::test]
    async fn test_find_many_preserves_request_order() {
        let repo = InMemoryUserRepository::seeded();

        let users = repo.find_many(vec![2, 0]).await.unwrap();

        assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![2, 0]);
    }

    #[tokio::test]
    async fn test_find_many_reports_unknown_positions() {
        let repo = InMemoryUserRepository::seeded();

        let err = repo.find_many(vec![0, 9, 1, 10]).await.unwrap_err();
        let details = err.to_error_info().details;

        assert!(details.get("[0].id").is_none());
        assert_eq!(details["[1].id"][0], "No user with id 9.");
        assert_eq!(details["[3].id"][0], "No user with id 10.");
    }

    #[tokio::test]
    async fn test_update_many_is_all_or_nothing() {
        let repo = InMemoryUserRepository::seeded();
        let patch = UserPatch {
            name: Some("Changed".to_string()),
            age: None,
        };

        let result = repo
            .update_many(vec![(0, patch.clone()), (42, patch)])
            .await;

        assert!(result.is_err());
        let john = repo.find_by_id(0).await.unwrap().unwrap();
        assert_eq!(john.name, "John");
    }

    #[tokio::test]
    async fn test_delete_many_is_all_or_nothing() {
        let repo = InMemoryUserRepository::seeded();

        assert!(repo.delete_many(vec![1, 99]).await.is_err());
        assert_eq!(repo.count().await.unwrap(), 3);

        let removed = repo.delete_many(vec![1, 1, 2]).await.unwrap();
        assert_eq!(removed.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_many_assigns_incremental_ids() {
        let repo = InMemoryUserRepository::seeded();

        let created = repo
            .create_many(vec![new_user("Rune", 29), new_user("Ada", 36)])
            .await
            .unwrap();

        assert_eq!(created[0], User::new(3, "Rune", 29));
        assert_eq!(created[1], User::new(4, "Ada", 36));
        assert_eq!(repo.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_create_uses_max_id_not_length() {
        let repo = InMemoryUserRepository::new(vec![User::new(10, "Solo", 50)]);

        let created = repo.create_many(vec![new_user("Next", 1)]).await.unwrap();

        assert_eq!(created[0].id, 11);
    }

    #[tokio::test]
    async fn test_empty_store_starts_at_zero() {
        let repo = InMemoryUserRepository::default();

        let created = repo.create_many(vec![new_user("First", 1)]).await.unwrap();

        assert_eq!(created[0].id, 0);
    }

    #[tokio::test]
    async fn test_delete_then_find_returns_none() {
        let repo = InMemoryUserRepository::seeded();

        assert!(repo.delete(0).await.unwrap().is_some());
        assert!(repo.find_by_id(0).await.unwrap().is_none());
        assert!(repo.delete(0).await.unwrap().is_none());
    }
}
