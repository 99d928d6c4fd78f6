//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` + `Validate` request DTOs for writes
//! - A `Serialize` response DTO returned at the API boundary

pub mod category;
