//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User lookup and batch CRUD
//! - [`services::auth_service::AuthService`] - Credential and token checks
//! - [`services::geometry`] - Circle and triangle formulas

pub mod services;
