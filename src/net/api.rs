//! Authentication API client.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`. In the default
//! (native) build the request paths are stubbed out so the pure
//! response-interpretation logic still compiles and tests run.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped to an `AuthError` whose `Display` string is
//! shown to the user as-is. A structured server rejection surfaces its
//! `detail` verbatim; anything else collapses to a fixed per-operation
//! fallback, with a distinct message for transport failures. Nothing
//! here panics or retries: one submit action means at most one request.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use crate::config;
use crate::net::types::{ErrorBody, LoginResponse};
use crate::session::Session;

#[cfg(feature = "csr")]
use crate::net::types::{LoginRequest, RegisterRequest};

/// User-facing authentication failures. `Display` is the exact string
/// rendered in the form's error slot.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Registration password fields disagree; no request was sent.
    #[error("Passwords do not match.")]
    PasswordMismatch,
    /// Structured rejection from the server, surfaced verbatim.
    #[error("{0}")]
    Rejected(String),
    /// Login rejected without a parseable `detail` message.
    #[error("Login failed. Please try again.")]
    LoginFailed,
    /// Registration rejected without a parseable `detail` message.
    #[error("Registration failed. Please try again.")]
    RegistrationFailed,
    /// A 2xx response whose body violates the wire contract.
    #[error("Received an invalid response from the server.")]
    InvalidResponse,
    /// The request never completed.
    #[error("An unexpected error occurred. Please try again later.")]
    Unexpected,
}

/// HTTP client for the authentication endpoints.
#[derive(Clone, Debug)]
pub struct AuthClient {
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Client pointed at the compile-time configured API base URL.
    pub fn from_env() -> Self {
        Self::new(config::api_url())
    }

    /// Full URL of a named auth endpoint under the configured base.
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/api/v1/auth/{name}", self.base_url)
    }

    /// Authenticate with email and password.
    ///
    /// # Errors
    ///
    /// Returns the user-displayable `AuthError` for server rejections,
    /// contract-violating bodies, and transport failures.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        #[cfg(feature = "csr")]
        {
            let request = LoginRequest {
                email: email.to_owned(),
                password: password.to_owned(),
            };
            let response = gloo_net::http::Request::post(&self.endpoint("login"))
                .json(&request)
                .map_err(|_| AuthError::Unexpected)?
                .send()
                .await
                .map_err(|_| AuthError::Unexpected)?;

            let body = response.text().await.unwrap_or_default();
            if !response.ok() {
                return Err(rejection_from_body(&body, AuthError::LoginFailed));
            }
            session_from_body(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(AuthError::Unexpected)
        }
    }

    /// Create an account. Succeeding does not log the user in; the
    /// caller navigates to the login page separately.
    ///
    /// # Errors
    ///
    /// Fails with `PasswordMismatch` before any request when the two
    /// password fields disagree; otherwise maps failures like `login`.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), AuthError> {
        if password != confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        #[cfg(feature = "csr")]
        {
            let request = RegisterRequest {
                name: name.to_owned(),
                email: email.to_owned(),
                password: password.to_owned(),
            };
            let response = gloo_net::http::Request::post(&self.endpoint("register"))
                .json(&request)
                .map_err(|_| AuthError::Unexpected)?
                .send()
                .await
                .map_err(|_| AuthError::Unexpected)?;

            if response.ok() {
                Ok(())
            } else {
                let body = response.text().await.unwrap_or_default();
                Err(rejection_from_body(&body, AuthError::RegistrationFailed))
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name, email);
            Err(AuthError::Unexpected)
        }
    }
}

/// Build a `Session` from a 2xx login body. Any missing field is a
/// contract violation, never a partial session.
///
/// # Errors
///
/// Returns `AuthError::InvalidResponse` when the body does not parse
/// as a complete `LoginResponse`.
pub fn session_from_body(body: &str) -> Result<Session, AuthError> {
    serde_json::from_str::<LoginResponse>(body)
        .map(Session::from)
        .map_err(|_| AuthError::InvalidResponse)
}

/// Map a non-2xx body to an error: a structured `detail` message is
/// surfaced verbatim, anything else becomes the given fallback.
pub fn rejection_from_body(body: &str, fallback: AuthError) -> AuthError {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .map_or(fallback, AuthError::Rejected)
}
