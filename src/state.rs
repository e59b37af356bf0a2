//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, UserService};
use crate::domain::entities::VersionInfo;
use crate::infrastructure::persistence::InMemoryUserRepository;

/// User service over the in-memory store.
pub type AppUserService = UserService<InMemoryUserRepository>;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<AppUserService>,
    pub auth_service: Arc<AuthService>,
    pub version: Arc<VersionInfo>,
}

impl AppState {
    pub fn new(
        user_service: Arc<AppUserService>,
        auth_service: Arc<AuthService>,
        version: VersionInfo,
    ) -> Self {
        Self {
            user_service,
            auth_service,
            version: Arc::new(version),
        }
    }

    /// State over `repository` with the default credential and token tables.
    pub fn with_repository(repository: InMemoryUserRepository, version: VersionInfo) -> Self {
        Self::new(
            Arc::new(UserService::new(Arc::new(repository))),
            Arc::new(AuthService::default()),
            version,
        )
    }
}
