//! The standard response body shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::pagination::PaginationMeta;

/// The JSON body every formatter operation emits.
///
/// Optional fields are omitted from the wire when absent. `status` mirrors
/// the HTTP status code the response is sent with.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
    pub status: u16,
}

impl Envelope {
    /// A success envelope with the given message and status.
    pub fn ok(message: impl Into<String>, status: StatusCode) -> Self {
        Self::new(true, message, status)
    }

    /// A failure envelope with the given message and status.
    pub fn err(message: impl Into<String>, status: StatusCode) -> Self {
        Self::new(false, message, status)
    }

    fn new(success: bool, message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            success,
            message: message.into(),
            data: None,
            details: None,
            error: None,
            pagination: None,
            status: status.as_u16(),
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_pagination(mut self, pagination: PaginationMeta) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// The HTTP status this envelope was built for.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (self.status_code(), Json(&self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_optional_fields_are_omitted() {
        let body = serde_json::to_value(Envelope::ok("Operation Successful", StatusCode::OK))
            .unwrap();
        assert_eq!(
            body,
            json!({"success": true, "message": "Operation Successful", "status": 200})
        );
    }

    #[test]
    fn test_field_order_matches_wire_contract() {
        let json = serde_json::to_string(
            &Envelope::ok("ok", StatusCode::OK).with_data(json!({"id": 1})),
        )
        .unwrap();
        assert!(json.starts_with(r#"{"success":true,"message":"ok","data""#));
        assert!(json.ends_with(r#""status":200}"#));
    }

    #[test]
    fn test_error_envelope_carries_details() {
        let body = serde_json::to_value(
            Envelope::err("Validation Failed", StatusCode::UNPROCESSABLE_ENTITY)
                .with_details(json!({"field": "email"})),
        )
        .unwrap();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["details"], json!({"field": "email"}));
        assert_eq!(body["status"], json!(422));
    }

    #[test]
    fn test_status_code_round_trips() {
        let envelope = Envelope::err("gone", StatusCode::NOT_FOUND);
        assert_eq!(envelope.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_repeated_serialization_is_byte_identical() {
        let envelope = Envelope::ok("ok", StatusCode::OK).with_data(json!([1, 2, 3]));
        let first = serde_json::to_vec(&envelope).unwrap();
        let second = serde_json::to_vec(&envelope).unwrap();
        assert_eq!(first, second);
    }
}
