//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls, `error` classifies their failures, and `types`
//! defines the auth wire schema.

pub mod api;
pub mod error;
pub mod types;
