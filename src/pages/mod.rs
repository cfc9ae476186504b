//! Application pages: login, registration, and the protected market
//! view.

pub mod login;
pub mod market;
pub mod register;
