#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use category_api::config::ServerConfig;
use category_api::router::build_app_router;
use category_api::state::AppState;
use category_db::PoolConfig;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Secret configured for every test app.
pub const TEST_AUTH_KEY: &str = "RAHASIA";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default).
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://localhost/category_test".to_string(),
        auth_key: TEST_AUTH_KEY.to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        pool: PoolConfig::default(),
    }
}

/// Build the full application router, using the given database pool.
///
/// Goes through `build_app_router`, so integration tests exercise the same
/// middleware stack (gatekeeper, CORS, request ID, tracing, panic recovery)
/// that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState::new(pool, test_config())).unwrap()
}

/// A pool that never connects unless a query is issued.
///
/// Lets tests prove a request was answered without reaching the database:
/// any query would fail after the one-second acquire timeout.
pub fn unreachable_pool() -> PgPool {
    let config = PoolConfig {
        min_connections: 0,
        acquire_timeout: Duration::from_secs(1),
        ..PoolConfig::default()
    };
    category_db::create_lazy_pool("postgres://nobody@127.0.0.1:1/none", &config).unwrap()
}

/// App backed by [`unreachable_pool`].
pub fn build_offline_app() -> Router {
    build_test_app(unreachable_pool())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a request, attaching `X-API-Key` when `api_key` is `Some`.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
    api_key: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(key) = api_key {
        builder = builder.header("X-API-Key", key);
    }
    let request = match body {
        Some(raw) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(raw.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Send an authorized request whose body carries the given `Content-Type`,
/// or none at all.
pub async fn send_with_content_type(
    app: Router,
    method: Method,
    uri: &str,
    body: &str,
    content_type: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("X-API-Key", TEST_AUTH_KEY);
    if let Some(ct) = content_type {
        builder = builder.header("Content-Type", ct);
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(TEST_AUTH_KEY)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(TEST_AUTH_KEY)).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    let raw = json.to_string();
    send(app, Method::POST, uri, Some(&raw), Some(TEST_AUTH_KEY)).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    let raw = json.to_string();
    send(app, Method::PUT, uri, Some(&raw), Some(TEST_AUTH_KEY)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Count rows in the `category` table.
pub async fn category_count(pool: &PgPool) -> i64 {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM category")
        .fetch_one(pool)
        .await
        .unwrap();
    count.0
}

/// Create a category through the API and return its id.
pub async fn create_category(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/categories",
        serde_json::json!({ "name": name }),
    )
    .await;
    let json = body_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}
