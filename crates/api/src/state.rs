use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::CategoryService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: category_db::DbPool,
    /// Server configuration (read by the API-key gatekeeper).
    pub config: Arc<ServerConfig>,
    /// Category business operations.
    pub categories: CategoryService,
}

impl AppState {
    /// Wire the service layer onto `pool`.
    pub fn new(pool: category_db::DbPool, config: ServerConfig) -> Self {
        Self {
            categories: CategoryService::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
