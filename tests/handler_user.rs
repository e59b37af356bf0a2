mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use axum_test::TestServer;
use serde_json::{Value, json};
use tower::ServiceExt;

fn make_server() -> TestServer {
    common::test_server()
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_user_success() {
    let server = make_server();

    let response = server.get("/api/v1/user/1").await;

    response.assert_status_ok();
    response.assert_json(&common::user_json(1, "Steve", 41));
}

#[tokio::test]
async fn test_get_user_unknown_id() {
    let server = make_server();

    let response = server.get("/api/v1/user/42").await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(common::error_details(&body)["id"][0], "No user with id 42.");
}

#[tokio::test]
async fn test_get_user_trailing_slash_normalized() {
    let app = tutorial_api::routes::app_router(common::create_test_state());

    let request = Request::builder()
        .uri("/api/v1/user/0/")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_user_returns_removed_record() {
    let server = make_server();

    let response = server.delete("/api/v1/user/2").await;

    response.assert_status_ok();
    response.assert_json(&common::user_json(2, "Bob", 34));
}

#[tokio::test]
async fn test_delete_then_get_fails() {
    let server = make_server();

    server.delete("/api/v1/user/0").await.assert_status_ok();

    server.get("/api/v1/user/0").await.assert_status_bad_request();
}

#[tokio::test]
async fn test_delete_twice_fails() {
    let server = make_server();

    // First delete succeeds.
    server.delete("/api/v1/user/1").await.assert_status_ok();

    // Second delete is rejected, the record is gone.
    server.delete("/api/v1/user/1").await.assert_status_bad_request();
}

// ─── PUT ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_user_merges_fields() {
    let server = make_server();

    let response = server
        .put("/api/v1/user/0")
        .json(&json!({ "age": "31" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&common::user_json(0, "John", 31));

    server
        .get("/api/v1/user/0")
        .await
        .assert_json(&common::user_json(0, "John", 31));
}

#[tokio::test]
async fn test_update_user_ignores_id_in_body() {
    let server = make_server();

    let response = server
        .put("/api/v1/user/1")
        .json(&json!({ "id": 99, "name": "Stephen" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&common::user_json(1, "Stephen", 41));
}

#[tokio::test]
async fn test_update_user_rejects_name_with_space() {
    let server = make_server();

    let response = server
        .put("/api/v1/user/1")
        .json(&json!({ "name": "Steve Jobs" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(
        common::error_details(&body)["name"][0],
        "Name must not contain a space."
    );

    server
        .get("/api/v1/user/1")
        .await
        .assert_json(&common::user_json(1, "Steve", 41));
}

#[tokio::test]
async fn test_update_user_rejects_age_out_of_range() {
    let server = make_server();

    for age in [-1, 101] {
        let response = server
            .put("/api/v1/user/2")
            .json(&json!({ "age": age }))
            .await;

        response.assert_status_bad_request();
        let body = response.json::<Value>();
        assert!(common::error_details(&body).get("age").is_some());
    }
}

#[tokio::test]
async fn test_update_user_unknown_id() {
    let server = make_server();

    let response = server
        .put("/api/v1/user/7")
        .json(&json!({ "name": "Ghost" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(common::error_details(&body)["id"][0], "No user with id 7.");
}

#[tokio::test]
async fn test_update_user_requires_name_or_age() {
    let server = make_server();

    for body in [json!({}), json!({ "id": 5 })] {
        let response = server.put("/api/v1/user/0").json(&body).await;

        response.assert_status_bad_request();
        let body = response.json::<Value>();
        assert_eq!(
            common::error_details(&body)["_schema"][0],
            "At least one of name or age is required."
        );
    }

    server
        .get("/api/v1/user/0")
        .await
        .assert_json(&common::user_json(0, "John", 30));
}

// ─── path id ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_non_integer_id_reports_json_error() {
    let server = make_server();

    let get = server.get("/api/v1/user/abc").await;
    let delete = server.delete("/api/v1/user/1.5").await;
    let put = server
        .put("/api/v1/user/x")
        .json(&json!({ "age": 20 }))
        .await;

    for response in [get, delete, put] {
        response.assert_status_bad_request();
        let body = response.json::<Value>();
        assert_eq!(
            common::error_details(&body)["id"][0],
            "Not a valid integer."
        );
    }
}
