//! Business layer.
//!
//! Services validate input, own the transaction boundary around repository
//! calls, and convert between row models and transfer objects.

pub mod category_service;

pub use category_service::CategoryService;
