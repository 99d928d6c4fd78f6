//! Category API server library.
//!
//! Exposes the building blocks (config, state, error handling, services,
//! routes, middleware) so integration tests and the binary entrypoint can
//! both access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
