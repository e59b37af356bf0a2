//! User entity held by the in-memory store.

/// A user record.
///
/// `id` is unique across the store and never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i64, name: impl Into<String>, age: i64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }

    /// Merges the fields present in `patch` into this record.
    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
    }
}

/// Input data for creating a new user. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub age: i64,
}

/// Partial update for an existing user.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub age: Option<i64>,
}

/// Records the store starts with.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(0, "John", 30),
        User::new(1, "Steve", 41),
        User::new(2, "Bob", 34),
    ]
}
