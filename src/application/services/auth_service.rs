//! Authentication service backing the credential and token gates.

use std::collections::{HashMap, HashSet};

use crate::error::AppError;

/// Challenge sent with 401 responses from the credential gate.
pub const BASIC_CHALLENGE: &str = r#"Basic realm="secret""#;

/// Challenge sent with 401 responses from the token gate.
pub const TOKEN_CHALLENGE: &str = r#"Bearer realm="secret""#;

const DEFAULT_CREDENTIALS: [(&str, &str); 3] = [
    ("john_doe", "123456"),
    ("jane_doe", "1q2w3e"),
    ("steve", "qwerty"),
];

const DEFAULT_TOKENS: [&str; 3] = ["qlv3onxe59", "0ib5ym8t4o", "fgqa8fepmq"];

/// Checks credentials and tokens against static, read-only tables.
#[derive(Debug, Clone)]
pub struct AuthService {
    credentials: HashMap<String, String>,
    tokens: HashSet<String>,
}

impl AuthService {
    /// Creates a service over the given credential table and token allow-list.
    pub fn new(
        credentials: impl IntoIterator<Item = (String, String)>,
        tokens: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            credentials: credentials.into_iter().collect(),
            tokens: tokens.into_iter().collect(),
        }
    }

    /// Verifies a username/password pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the user is unknown or the
    /// password does not match.
    pub fn verify_credentials(&self, username: &str, password: &str) -> Result<(), AppError> {
        match self.credentials.get(username) {
            Some(expected) if expected == password => Ok(()),
            Some(_) => {
                tracing::warn!(username, "Password mismatch");
                Err(AppError::unauthorized(BASIC_CHALLENGE))
            }
            None => {
                tracing::warn!(username, "Unknown username");
                Err(AppError::unauthorized(BASIC_CHALLENGE))
            }
        }
    }

    /// Verifies an opaque API token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is not in the allow-list.
    pub fn verify_token(&self, token: &str) -> Result<(), AppError> {
        if self.tokens.contains(token) {
            Ok(())
        } else {
            tracing::warn!("Token not in allow-list");
            Err(AppError::unauthorized(TOKEN_CHALLENGE))
        }
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new(
            DEFAULT_CREDENTIALS
                .iter()
                .map(|(user, pass)| (user.to_string(), pass.to_string())),
            DEFAULT_TOKENS.iter().map(|t| t.to_string()),
        )
    }
}
