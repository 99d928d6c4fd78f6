//! Shared-secret gatekeeper.
//!
//! Wraps the whole router, so no handler (including the fallback) runs for a
//! request that fails the check.

use axum::extract::{Request, State};
use axum::http::HeaderName;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use category_core::error::CoreError;
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// Compare the presented key against the expected secret in constant time.
///
/// An absent or non-UTF-8 header never matches.
pub fn is_authorized(expected: &str, presented: Option<&str>) -> bool {
    match presented {
        Some(key) => expected.as_bytes().ct_eq(key.as_bytes()).into(),
        None => false,
    }
}

/// Forward the request when `X-API-Key` matches, otherwise answer 401.
///
/// Install with `axum::middleware::from_fn_with_state`.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(&API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if is_authorized(&state.config.auth_key, presented) {
        return next.run(request).await;
    }

    tracing::warn!(
        method = %request.method(),
        path = %request.uri().path(),
        key_present = presented.is_some(),
        "Rejected request with invalid API key",
    );

    AppError::Core(CoreError::Unauthorized("Invalid or missing API key".into())).into_response()
}
