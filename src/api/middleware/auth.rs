//! Authentication gates for the secret endpoints.
//!
//! Both gates are plain `from_fn_with_state` middleware attached with
//! `route_layer`, so every method routed on the gated resource is covered.
//! A rejected request gets `401 Unauthorized` with an empty body and a
//! `WWW-Authenticate` challenge; an accepted one is forwarded untouched.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use base64::{Engine, engine::general_purpose::STANDARD};

use crate::application::services::auth_service::{BASIC_CHALLENGE, TOKEN_CHALLENGE};
use crate::{error::AppError, state::AppState};

/// Header carrying the API token.
pub const API_TOKEN_HEADER: &str = "x-api-token";

/// Separate-header credential form.
pub const USERNAME_HEADER: &str = "username";
pub const PASSWORD_HEADER: &str = "password";

/// Authenticates requests with a username/password pair.
///
/// # Header Format
///
/// Either
///
/// ```text
/// Authorization: Basic <username>:<password>
/// ```
///
/// where the pair may also be base64-encoded as in RFC 7617, or
///
/// ```text
/// username: <username>
/// password: <password>
/// ```
///
/// The `Authorization` header wins when both forms are present.
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - no credentials are supplied
/// - the `Authorization` header is malformed or uses another scheme
/// - the username is unknown or the password does not match
///
/// # Example
///
/// ```rust,ignore
/// let gated = Router::new()
///     .route("/secret/basic", get(secret_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::basic_layer));
/// ```
pub async fn basic_layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (username, password) = credentials_from_headers(req.headers()).ok_or_else(|| {
        tracing::warn!("Credentials missing or malformed");
        AppError::unauthorized(BASIC_CHALLENGE)
    })?;

    st.auth_service.verify_credentials(&username, &password)?;

    Ok(next.run(req).await)
}

/// Authenticates requests with an opaque API token.
///
/// # Header Format
///
/// ```text
/// X-Api-Token: <token>
/// ```
///
/// Falls back to `Authorization: Bearer <token>` when `X-Api-Token` is absent.
///
/// # Errors
///
/// Returns `401 Unauthorized` if no token is supplied or the token is not
/// in the allow-list.
pub async fn token_layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let token = match header_str(&parts.headers, API_TOKEN_HEADER) {
        Some(token) => token.to_string(),
        None => {
            let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
                .await
                .map_err(|_| {
                    tracing::warn!("API token missing");
                    AppError::unauthorized(TOKEN_CHALLENGE)
                })?;
            token
        }
    };

    st.auth_service.verify_token(&token)?;

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Extracts a username/password pair from either supported header form.
fn credentials_from_headers(headers: &HeaderMap) -> Option<(String, String)> {
    if let Some(value) = headers.get(AUTHORIZATION) {
        return value.to_str().ok().and_then(parse_basic);
    }

    let username = header_str(headers, USERNAME_HEADER)?;
    let password = header_str(headers, PASSWORD_HEADER)?;
    Some((username.to_string(), password.to_string()))
}

/// Parses `Basic <user>:<pass>` or `Basic <base64(user:pass)>`.
fn parse_basic(value: &str) -> Option<(String, String)> {
    let (scheme, credentials) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let credentials = credentials.trim();
    if credentials.is_empty() || credentials.contains(' ') {
        return None;
    }

    let pair = if credentials.contains(':') {
        credentials.to_string()
    } else {
        let decoded = STANDARD.decode(credentials).ok()?;
        String::from_utf8(decoded).ok()?
    };

    let (username, password) = pair.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}
