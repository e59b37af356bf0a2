//! Core domain entities.
//!
//! Entities are plain data structures; the [`User`] entity is split the same
//! way across creation and update:
//!
//! - [`User`] - a stored record
//! - [`NewUser`] - input for creating a record (id assigned by the store)
//! - [`UserPatch`] - partial update
//! - [`VersionInfo`] - the version descriptor served by the API

pub mod user;
pub mod version;

pub use user::{NewUser, User, UserPatch, seed_users};
pub use version::VersionInfo;
