#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use tutorial_api::domain::entities::{User, VersionInfo};
use tutorial_api::infrastructure::persistence::InMemoryUserRepository;
use tutorial_api::routes::build_router;
use tutorial_api::state::AppState;

/// State over the three seed users, reporting version `1.0`.
pub fn create_test_state() -> AppState {
    AppState::with_repository(InMemoryUserRepository::seeded(), VersionInfo::new("1", "0"))
}

/// State over exactly `users`.
pub fn create_state_with_users(users: Vec<User>) -> AppState {
    AppState::with_repository(InMemoryUserRepository::new(users), VersionInfo::new("1", "0"))
}

/// Full application router over the seed users.
pub fn test_server() -> TestServer {
    TestServer::new(build_router(create_test_state())).unwrap()
}

pub fn server_with_state(state: AppState) -> TestServer {
    TestServer::new(build_router(state)).unwrap()
}

/// Field → messages report of a `400` response body.
pub fn error_details(body: &Value) -> &Value {
    assert_eq!(body["error"]["code"], "validation_error");
    &body["error"]["details"]
}

pub fn user_json(id: i64, name: &str, age: i64) -> Value {
    json!({ "id": id, "name": name, "age": age })
}
