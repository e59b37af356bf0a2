//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects and their validation rules
//! - [`extract`] - Body extractors that validate before the handler runs
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication gates and tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
