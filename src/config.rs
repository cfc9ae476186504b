//! Frontend configuration.
//!
//! A single setting is recognized: the base URL of the authentication
//! API, baked in at compile time. An empty base means requests go to
//! the same origin the app was served from.

/// Base API URL, resolved once from `STOCKDESK_API_URL` at build time.
pub fn api_url() -> &'static str {
    option_env!("STOCKDESK_API_URL").unwrap_or("")
}
