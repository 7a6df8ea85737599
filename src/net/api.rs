//! REST API helpers for communicating with the analytics backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call returns
//! [`ApiError::Unavailable`] since there is no browser `fetch`.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthApi`] is the seam the session manager talks through. [`HttpApi`] is
//! the only production implementation; tests substitute an in-memory fake.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{LoginForm, Profile, RegisterRequest, TokenResponse};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const PROFILE_PATH: &str = "/auth/me";

#[cfg(any(test, feature = "csr"))]
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Backend operations the session manager depends on, plus the bearer-aware
/// pass-through used by pages for every other endpoint.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchange credentials for a bearer token.
    async fn login(&self, form: &LoginForm) -> Result<TokenResponse, ApiError>;

    /// Create an account. Does not yield a token.
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;

    /// Fetch the profile that owns `token`.
    async fn fetch_profile(&self, token: &str) -> Result<Profile, ApiError>;

    /// `GET path`, attaching `bearer` when present.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, bearer: Option<&str>) -> Result<T, ApiError>;

    /// `POST path` with a JSON body, attaching `bearer` when present.
    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<T, ApiError>;
}

/// `Authorization` header value for a token, if there is one.
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token
        .filter(|token| !token.is_empty())
        .map(|token| format!("Bearer {token}"))
}

/// Join the base URL and an endpoint path with exactly one slash.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Browser HTTP client rooted at the configured API base URL.
#[derive(Clone, Debug)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }
}

impl AuthApi for HttpApi {
    async fn login(&self, form: &LoginForm) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url(LOGIN_PATH))
                .header("Content-Type", FORM_CONTENT_TYPE)
                .body(form.encode())
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            decode_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(LOGIN_PATH), form);
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url(REGISTER_PATH))
                .json(request)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            if !resp.ok() {
                return Err(rejection(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(REGISTER_PATH), request);
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_profile(&self, token: &str) -> Result<Profile, ApiError> {
        self.get_json(PROFILE_PATH, Some(token)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, bearer: Option<&str>) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let mut builder = gloo_net::http::Request::get(&self.url(path));
            if let Some(value) = bearer_header(bearer) {
                builder = builder.header("Authorization", &value);
            }
            let resp = builder.send().await.map_err(transport)?;
            decode_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(path), bearer);
            Err(ApiError::Unavailable)
        }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let mut builder = gloo_net::http::Request::post(&self.url(path));
            if let Some(value) = bearer_header(bearer) {
                builder = builder.header("Authorization", &value);
            }
            let resp = builder
                .json(body)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            decode_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(path), body, bearer);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "csr")]
async fn rejection(resp: gloo_net::http::Response) -> ApiError {
    let body = resp.text().await.unwrap_or_default();
    ApiError::rejected(resp.status(), &body)
}

#[cfg(feature = "csr")]
async fn decode_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(rejection(resp).await);
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
