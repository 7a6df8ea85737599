use super::*;
use crate::net::error::ApiError;
use crate::state::session::SessionError;
use crate::util::auth::auth_error_message;

fn filled() -> RegisterInput {
    RegisterInput {
        name: "Jo Lee".to_owned(),
        roll_number: "E1".to_owned(),
        email: "jo@x.edu".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
    }
}

#[test]
fn validate_register_input_accepts_complete_form() {
    assert_eq!(validate_register_input(&filled()), Ok(()));
}

#[test]
fn validate_register_input_requires_every_field() {
    let mut input = filled();
    input.roll_number = "  ".to_owned();
    assert_eq!(validate_register_input(&input), Err("All fields are required."));
    assert_eq!(
        validate_register_input(&RegisterInput::default()),
        Err("All fields are required.")
    );
}

#[test]
fn validate_register_input_rejects_mismatched_confirmation() {
    let mut input = filled();
    input.confirm_password = "secret2".to_owned();
    assert_eq!(validate_register_input(&input), Err("Passwords do not match."));
}

#[test]
fn validate_register_input_checks_mismatch_before_length() {
    let mut input = filled();
    input.password = "abc".to_owned();
    input.confirm_password = "abd".to_owned();
    assert_eq!(validate_register_input(&input), Err("Passwords do not match."));
}

#[test]
fn validate_register_input_enforces_minimum_length() {
    let mut input = filled();
    input.password = "abc12".to_owned();
    input.confirm_password = "abc12".to_owned();
    assert_eq!(
        validate_register_input(&input),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn validate_register_input_counts_characters_not_bytes() {
    let mut input = filled();
    input.password = "ééééé".to_owned();
    input.confirm_password = "ééééé".to_owned();
    assert_eq!(
        validate_register_input(&input),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn duplicate_email_shows_backend_detail() {
    let err = SessionError::Api(ApiError::rejected(400, r#"{"detail":"Email already registered"}"#));
    assert_eq!(auth_error_message(&err, REGISTER_FALLBACK), "Email already registered");
}

#[test]
fn server_error_without_detail_shows_retry_prompt() {
    let err = SessionError::Api(ApiError::rejected(500, "Internal Server Error"));
    assert_eq!(
        auth_error_message(&err, REGISTER_FALLBACK),
        "Registration failed. Please try again."
    );
}
