//! DTOs for the single-user and user-collection endpoints.
//!
//! | Method | Body item                  | Rules                                      |
//! |--------|----------------------------|--------------------------------------------|
//! | GET    | `{id}`                     | id required                                |
//! | DELETE | `{id}`                     | id required                                |
//! | PUT    | `{id, name?, age?}`        | name without spaces, age in 0..=100, one of name/age present |
//! | POST   | `{name, age}`              | both required                              |
//!
//! The single-user PUT body is [`UserPatchRequest`]: the same name/age rules
//! without `id`.

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use super::coerce::Lenient;
use super::required;
use crate::domain::entities::{NewUser, User, UserPatch};
use crate::error::AppError;

/// JSON representation of a user.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserItem {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl From<User> for UserItem {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            age: user.age,
        }
    }
}

/// `{id}` item of collection GET and DELETE bodies.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct UserIdItem {
    #[serde_as(as = "Option<Lenient>")]
    #[validate(required)]
    pub id: Option<i64>,
}

/// Body of `PUT /user/{id}`. Keys other than `name` and `age` are ignored,
/// so an `id` in the body cannot change the record's id. At least one of
/// `name` or `age` must be present.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "patch_has_field"))]
pub struct UserPatchRequest {
    #[validate(custom(function = "no_spaces"))]
    pub name: Option<String>,

    #[serde_as(as = "Option<Lenient>")]
    #[validate(range(
        min = 0,
        max = 100,
        message = "Must be greater than or equal to 0 and less than or equal to 100."
    ))]
    pub age: Option<i64>,
}

impl From<UserPatchRequest> for UserPatch {
    fn from(request: UserPatchRequest) -> Self {
        Self {
            name: request.name,
            age: request.age,
        }
    }
}

/// Item of the collection PUT body.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "name_or_age_present"))]
pub struct UserUpdateItem {
    #[serde_as(as = "Option<Lenient>")]
    #[validate(required)]
    pub id: Option<i64>,

    #[validate(custom(function = "no_spaces"))]
    pub name: Option<String>,

    #[serde_as(as = "Option<Lenient>")]
    #[validate(range(
        min = 0,
        max = 100,
        message = "Must be greater than or equal to 0 and less than or equal to 100."
    ))]
    pub age: Option<i64>,
}

impl UserUpdateItem {
    /// Splits the item into the target id and the patch to apply.
    pub fn into_patch(self, idx: usize) -> Result<(i64, UserPatch), AppError> {
        let id = required(self.id, format!("[{idx}].id"))?;
        Ok((
            id,
            UserPatch {
                name: self.name,
                age: self.age,
            },
        ))
    }
}

/// Item of the collection POST body.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct UserCreateItem {
    #[validate(required)]
    pub name: Option<String>,

    #[serde_as(as = "Option<Lenient>")]
    #[validate(required)]
    pub age: Option<i64>,
}

impl UserCreateItem {
    pub fn into_new_user(self, idx: usize) -> Result<NewUser, AppError> {
        Ok(NewUser {
            name: required(self.name, format!("[{idx}].name"))?,
            age: required(self.age, format!("[{idx}].age"))?,
        })
    }
}

fn no_spaces(name: &str) -> Result<(), ValidationError> {
    if name.contains(' ') {
        return Err(ValidationError::new("no_spaces")
            .with_message(Cow::Borrowed("Name must not contain a space.")));
    }
    Ok(())
}

fn name_or_age(name: &Option<String>, age: &Option<i64>) -> Result<(), ValidationError> {
    if name.is_none() && age.is_none() {
        return Err(ValidationError::new("name_or_age")
            .with_message(Cow::Borrowed("At least one of name or age is required.")));
    }
    Ok(())
}

fn name_or_age_present(item: &UserUpdateItem) -> Result<(), ValidationError> {
    name_or_age(&item.name, &item.age)
}

fn patch_has_field(request: &UserPatchRequest) -> Result<(), ValidationError> {
    name_or_age(&request.name, &request.age)
}

/// Collects the ids of a GET/DELETE batch, in request order.
pub fn collect_ids(items: Vec<UserIdItem>) -> Result<Vec<i64>, AppError> {
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| required(item.id, format!("[{idx}].id")))
        .collect()
}
