//! Build-time client configuration.
//!
//! The API base URL is baked in at compile time from `EDUNEXUS_API_BASE_URL`
//! since a static WASM bundle has no process environment to read at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `EDUNEXUS_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Resolved API base URL without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("EDUNEXUS_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}
