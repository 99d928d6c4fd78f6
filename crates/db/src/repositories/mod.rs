//! Repository layer.
//!
//! Each repository is a zero-sized struct whose async methods take an open
//! [`DbTransaction`](crate::DbTransaction) as the first argument. Repositories
//! never commit or roll back; the caller owns the transaction.

pub mod category_repo;

pub use category_repo::CategoryRepo;
