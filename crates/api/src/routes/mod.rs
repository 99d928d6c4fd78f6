pub mod category;
pub mod health;

use axum::http::StatusCode;
use axum::Router;

use crate::response::Envelope;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /categories                       list, create
/// /categories/{category_id}         get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/categories", category::router())
}

/// Fallback for unmatched paths.
pub async fn not_found() -> Envelope<Option<String>> {
    Envelope::new(StatusCode::NOT_FOUND, None)
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> Envelope<Option<String>> {
    Envelope::new(StatusCode::METHOD_NOT_ALLOWED, None)
}
