//! Authentication module
//!
//! Supports: API Key (query parameter), Bearer token (header)
//!
//! The `Authenticator` applies the configured credential uniformly to every
//! outgoing request.

mod authenticator;
mod types;

pub use authenticator::{Authenticator, API_KEY_PARAM};
pub use types::Credential;

#[cfg(test)]
mod tests;
