//! API route configuration.
//!
//! All routes are relative to the `/api/v1` prefix applied in
//! [`crate::routes`].

use crate::api::handlers::{
    area_handler, circumference_handler, create_users_handler, delete_user_handler,
    delete_users_handler, get_user_handler, get_users_handler, radius_handler, secret_handler,
    update_user_handler, update_users_handler, version_handler,
};
use crate::api::middleware::auth;
use crate::state::AppState;
use axum::{Router, middleware, routing::get};

/// Public API routes.
///
/// # Endpoints
///
/// - `GET                 /version`                  - Version string or object
/// - `GET|POST            /math/circle/circumference` - `2πr`
/// - `GET|POST            /math/circle/radius`       - `c / 2π`
/// - `GET|POST            /math/triangle/area`       - `b·h / 2`
/// - `GET|PUT|DELETE      /user/{id}`                - Single user
/// - `GET|PUT|POST|DELETE /user`                     - Batch user operations
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/version", get(version_handler))
        .route(
            "/math/circle/circumference",
            get(circumference_handler).post(circumference_handler),
        )
        .route(
            "/math/circle/radius",
            get(radius_handler).post(radius_handler),
        )
        .route(
            "/math/triangle/area",
            get(area_handler).post(area_handler),
        )
        .route(
            "/user/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route(
            "/user",
            get(get_users_handler)
                .put(update_users_handler)
                .post(create_users_handler)
                .delete(delete_users_handler),
        )
}

/// Secret endpoints, each behind its own gate.
///
/// # Endpoints
///
/// - `GET /secret/basic` - Username/password gate ([`auth::basic_layer`])
/// - `GET /secret/token` - API token gate ([`auth::token_layer`])
pub fn gated_routes(state: AppState) -> Router<AppState> {
    let basic = Router::new()
        .route("/secret/basic", get(secret_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::basic_layer,
        ));

    let token = Router::new()
        .route("/secret/token", get(secret_handler))
        .route_layer(middleware::from_fn_with_state(state, auth::token_layer));

    Router::new().merge(basic).merge(token)
}

/// Every `/api/v1` route.
pub fn api_routes(state: AppState) -> Router<AppState> {
    public_routes().merge(gated_routes(state))
}
