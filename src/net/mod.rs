//! Network layer: wire types and the authentication API client.

pub mod api;
pub mod types;
