use super::*;

use std::future::Future;
use std::task::{Context, Poll, Waker};

/// Poll a future exactly once. Paths that complete without touching
/// the network must be `Ready` on the first poll.
fn poll_once<F: Future>(fut: F) -> Option<F::Output> {
    let mut fut = Box::pin(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(value) => Some(value),
        Poll::Pending => None,
    }
}

// =============================================================
// Success-body interpretation
// =============================================================

#[test]
fn session_from_body_maps_all_fields_verbatim() {
    let body = r#"{
        "access_token": "t1",
        "refresh_token": "t2",
        "user_id": "42",
        "username": "alice"
    }"#;

    let session = session_from_body(body).expect("complete body");
    assert_eq!(session.access_token, "t1");
    assert_eq!(session.refresh_token, "t2");
    assert_eq!(session.user_id, "42");
    assert_eq!(session.username, "alice");
}

#[test]
fn session_from_body_rejects_missing_access_token() {
    let body = r#"{"refresh_token":"t2","user_id":"42","username":"alice"}"#;
    assert_eq!(session_from_body(body), Err(AuthError::InvalidResponse));
}

#[test]
fn session_from_body_rejects_unparseable_body() {
    assert_eq!(session_from_body("not json"), Err(AuthError::InvalidResponse));
}

// =============================================================
// Rejection-body interpretation
// =============================================================

#[test]
fn rejection_surfaces_detail_verbatim() {
    let err = rejection_from_body(r#"{"detail":"bad password"}"#, AuthError::LoginFailed);
    assert_eq!(err, AuthError::Rejected("bad password".to_owned()));
    assert_eq!(err.to_string(), "bad password");
}

#[test]
fn rejection_without_detail_uses_fallback() {
    let err = rejection_from_body("{}", AuthError::LoginFailed);
    assert_eq!(err, AuthError::LoginFailed);
}

#[test]
fn rejection_with_null_detail_uses_fallback() {
    let err = rejection_from_body(r#"{"detail":null}"#, AuthError::RegistrationFailed);
    assert_eq!(err, AuthError::RegistrationFailed);
}

#[test]
fn rejection_with_unparseable_body_uses_fallback() {
    let err = rejection_from_body("<html>502</html>", AuthError::LoginFailed);
    assert_eq!(err, AuthError::LoginFailed);
}

// =============================================================
// Error messages
// =============================================================

#[test]
fn transport_message_is_distinct_from_rejection_fallbacks() {
    let transport = AuthError::Unexpected.to_string();
    assert_ne!(transport, AuthError::LoginFailed.to_string());
    assert_ne!(transport, AuthError::RegistrationFailed.to_string());
}

#[test]
fn password_mismatch_message_is_fixed() {
    assert_eq!(AuthError::PasswordMismatch.to_string(), "Passwords do not match.");
}

// =============================================================
// Client behavior
// =============================================================

#[test]
fn endpoint_joins_base_and_operation() {
    let client = AuthClient::new("http://api.test");
    assert_eq!(client.endpoint("login"), "http://api.test/api/v1/auth/login");
    assert_eq!(client.endpoint("register"), "http://api.test/api/v1/auth/register");
}

#[test]
fn register_password_mismatch_fails_before_any_request() {
    let client = AuthClient::new("http://api.test");
    // Ready on the first poll: the mismatch is caught before the
    // request path is ever reached.
    let result = poll_once(client.register("bob", "b@c.com", "x", "y"));
    assert_eq!(result, Some(Err(AuthError::PasswordMismatch)));
}
