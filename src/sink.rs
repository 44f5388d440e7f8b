//! The response sink seam.
//!
//! A sink is anything that can take a status code and emit a JSON body.
//! The formatter only ever writes to it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Capability over an HTTP response object: set a status code, then
/// serialize and emit a JSON body.
pub trait ResponseSink: Sized {
    /// What emitting the body produces (e.g. an HTTP response).
    type Output;

    fn set_status(self, status: StatusCode) -> Self;

    fn write_json<T: Serialize>(self, body: &T) -> Self::Output;
}

/// Sink adapter over axum's response machinery.
///
/// Stages the status code (200 until set) and finishes by building an
/// `axum::response::Response` from the status and the JSON body.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxumSink {
    status: StatusCode,
}

impl AxumSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResponseSink for AxumSink {
    type Output = Response;

    fn set_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    fn write_json<T: Serialize>(self, body: &T) -> Response {
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_axum_sink_defaults_to_ok() {
        let response = AxumSink::new().write_json(&json!({"ping": "pong"}));
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_axum_sink_applies_staged_status() {
        let response = AxumSink::new()
            .set_status(StatusCode::IM_A_TEAPOT)
            .write_json(&json!({}));
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    }

    #[test]
    fn test_axum_sink_emits_json_content_type() {
        let response = AxumSink::new().write_json(&json!({"ok": true}));
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .unwrap();
        assert_eq!(content_type, "application/json");
    }
}
