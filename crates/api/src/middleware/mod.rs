//! Request middleware.
//!
//! - [`api_key::require_api_key`] -- Rejects requests whose `X-API-Key` header
//!   does not match the configured secret.

pub mod api_key;
