//! Infrastructure layer implementing the domain repository traits.
//!
//! - [`persistence`] - the in-memory user store

pub mod persistence;
