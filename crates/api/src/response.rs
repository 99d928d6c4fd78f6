//! Shared response envelope for every API response.
//!
//! All responses, success or failure, use `{ "code": ..., "status": ..., "data": ... }`.
//! Build them through [`Envelope`] rather than ad-hoc `serde_json::json!` so the
//! HTTP status and the `code` field cannot drift apart.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Standard `{ code, status, data }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Envelope::ok(categories))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub code: u16,
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap `data` with the given HTTP status.
    pub fn new(status: StatusCode, data: T) -> Self {
        Self {
            code: status.as_u16(),
            status: status_text(status),
            data,
        }
    }

    /// `200 OK` with a payload.
    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::OK, data)
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Short status text carried in the envelope's `status` field.
///
/// Uses the canonical reason phrase in upper case (`"BAD REQUEST"`, `"NOT FOUND"`).
pub fn status_text(status: StatusCode) -> &'static str {
    match status {
        StatusCode::OK => "OK",
        StatusCode::BAD_REQUEST => "BAD REQUEST",
        StatusCode::UNAUTHORIZED => "UNAUTHORIZED",
        StatusCode::NOT_FOUND => "NOT FOUND",
        StatusCode::METHOD_NOT_ALLOWED => "METHOD NOT ALLOWED",
        _ => "INTERNAL SERVER ERROR",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn ok_envelope_carries_payload() {
        let value = serde_json::to_value(Envelope::ok(json!({"id": 1, "name": "Rendang"}))).unwrap();
        assert_eq!(
            value,
            json!({"code": 200, "status": "OK", "data": {"id": 1, "name": "Rendang"}})
        );
    }

    #[test]
    fn unit_payload_serializes_as_null() {
        let value = serde_json::to_value(Envelope::ok(())).unwrap();
        assert_eq!(value, json!({"code": 200, "status": "OK", "data": null}));
    }

    #[test]
    fn status_text_matches_error_statuses() {
        assert_eq!(status_text(StatusCode::BAD_REQUEST), "BAD REQUEST");
        assert_eq!(status_text(StatusCode::NOT_FOUND), "NOT FOUND");
        assert_eq!(status_text(StatusCode::UNAUTHORIZED), "UNAUTHORIZED");
        assert_eq!(
            status_text(StatusCode::INTERNAL_SERVER_ERROR),
            "INTERNAL SERVER ERROR"
        );
    }

    #[test]
    fn into_response_uses_envelope_code_as_status() {
        let response = Envelope::new(StatusCode::NOT_FOUND, "gone").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
