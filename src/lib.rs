//! # Tutorial API
//!
//! A small REST API built with Axum: version info, circle and triangle
//! geometry, CRUD over an in-memory user list, and two toy authentication
//! gates in front of a secret.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Services and formulas
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory user store
//! - **API Layer** ([`api`]) - Handlers, DTOs, validation and auth middleware
//!
//! ## Request Flow
//!
//! request → route dispatch → auth gate (secret routes) → body validation →
//! handler → response
//!
//! Validation failures answer `400` with a field → messages report;
//! authentication failures answer `401` with an empty body.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl -X GET 127.0.0.1:5000/api/v1/secret/basic -H 'Authorization: Basic steve:qwerty'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, UserService};
    pub use crate::domain::entities::{NewUser, User, UserPatch, VersionInfo};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryUserRepository;
    pub use crate::state::AppState;
}
