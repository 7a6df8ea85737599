//! Wire DTOs for the auth contract with the analytics backend.
//!
//! DESIGN
//! ======
//! Only the auth endpoints are typed here. Page-level endpoints
//! (`/predictions/*`, `/students/*`, `/collaboration/*`) are treated as opaque
//! JSON and never get a schema on the client side.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credentials for `POST /auth/login`.
///
/// The backend reads an OAuth2 password form, so the email goes in the
/// `username` field and the body is form-encoded rather than JSON.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            username: email.to_owned(),
            password: password.to_owned(),
        }
    }

    /// Encode as an `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        format!(
            "username={}&password={}",
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password)
        )
    }
}

/// JSON body for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub roll_number: String,
    pub email: String,
    pub password: String,
}

/// Response of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// The authenticated student as returned by `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Numeric student identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Institutional roll number (e.g. `"ENX2026-042"`).
    pub roll_number: String,
}
