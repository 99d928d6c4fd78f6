//! Domain primitives shared by the database and HTTP layers.
//!
//! Has no internal dependencies so both `category-db` and `category-api`
//! can depend on it without cycles.

pub mod error;
pub mod types;
pub mod validation;
