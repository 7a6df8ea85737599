//! Reusable view components shared across pages.

pub mod require_auth;
