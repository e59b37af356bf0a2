//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod geometry;
pub mod health;
pub mod secret;
pub mod user;
pub mod users;
pub mod version;

pub use geometry::{area_handler, circumference_handler, radius_handler};
pub use health::health_handler;
pub use secret::secret_handler;
pub use user::{delete_user_handler, get_user_handler, update_user_handler};
pub use users::{create_users_handler, delete_users_handler, get_users_handler, update_users_handler};
pub use version::version_handler;
