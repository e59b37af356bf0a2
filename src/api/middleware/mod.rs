//! HTTP middleware for request processing and protection.
//!
//! Provides the two authentication gates and request tracing.

pub mod auth;
pub mod tracing;
