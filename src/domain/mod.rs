//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP layer; services in
//! [`crate::application::services`] orchestrate it.

pub mod entities;
pub mod repositories;
