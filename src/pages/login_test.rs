use super::*;
use crate::net::error::ApiError;
use crate::state::session::SessionError;
use crate::util::auth::auth_error_message;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  jo@x.edu ", "secret1"),
        Ok(("jo@x.edu".to_owned(), "secret1".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("jo@x.edu", " pass word "),
        Ok(("jo@x.edu".to_owned(), " pass word ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("   ", "secret1"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("jo@x.edu", ""),
        Err("Enter both email and password.")
    );
}

#[test]
fn offline_login_shows_retry_prompt() {
    let err = SessionError::Api(ApiError::Transport("network unreachable".to_owned()));
    assert_eq!(
        auth_error_message(&err, LOGIN_FALLBACK),
        "Invalid credentials. Please try again."
    );
}

#[test]
fn gateway_error_page_shows_retry_prompt() {
    let err = SessionError::Api(ApiError::rejected(502, "<html>Bad Gateway</html>"));
    assert_eq!(
        auth_error_message(&err, LOGIN_FALLBACK),
        "Invalid credentials. Please try again."
    );
}

#[test]
fn rejected_login_shows_backend_detail() {
    let err = SessionError::Api(ApiError::rejected(401, r#"{"detail":"Invalid credentials"}"#));
    assert_eq!(auth_error_message(&err, LOGIN_FALLBACK), "Invalid credentials");
}
