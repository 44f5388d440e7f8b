//! The formatter operations.
//!
//! Each function sets a status code on the sink and emits the matching
//! envelope. Fixed-status operations take no status parameter, so a caller
//! cannot send `created` with anything but 201. Default message strings are
//! exported so call sites and the error renderer stay consistent.

use std::fmt::Display;

use axum::http::StatusCode;
use serde_json::Value;

use crate::envelope::Envelope;
use crate::sink::ResponseSink;

pub const SUCCESS_MESSAGE: &str = "Operation Successful";
pub const CREATED_MESSAGE: &str = "Resource Created Successfully";
pub const BAD_REQUEST_MESSAGE: &str = "Bad Request";
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized Access";
pub const FORBIDDEN_MESSAGE: &str = "Forbidden Access";
pub const NOT_FOUND_MESSAGE: &str = "Resource Not Found";
pub const SERVER_ERROR_MESSAGE: &str = "Internal Server Error";
pub const VALIDATION_MESSAGE: &str = "Validation Failed";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";
pub const PAGINATED_MESSAGE: &str = "Data Retrieved Successfully";
pub const NO_CONTENT_MESSAGE: &str = "No Content";

/// Substituted when a caught error renders an empty message.
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Success envelope; status defaults to 200.
pub fn success<S: ResponseSink>(
    sink: S,
    message: impl Into<String>,
    data: Option<Value>,
    status: Option<StatusCode>,
) -> S::Output {
    let status = status.unwrap_or(StatusCode::OK);
    let mut body = Envelope::ok(message, status);
    body.data = data;
    sink.set_status(status).write_json(&body)
}

/// Success envelope for a newly created resource; always 201.
pub fn created<S: ResponseSink>(
    sink: S,
    message: impl Into<String>,
    data: Option<Value>,
) -> S::Output {
    success(sink, message, data, Some(StatusCode::CREATED))
}

/// Failure envelope; status defaults to 400.
pub fn client_error<S: ResponseSink>(
    sink: S,
    message: impl Into<String>,
    status: Option<StatusCode>,
    details: Option<Value>,
) -> S::Output {
    let status = status.unwrap_or(StatusCode::BAD_REQUEST);
    let mut body = Envelope::err(message, status);
    body.details = details;
    sink.set_status(status).write_json(&body)
}

/// Failure envelope; always 401.
pub fn unauthorized<S: ResponseSink>(sink: S, message: impl Into<String>) -> S::Output {
    client_error(sink, message, Some(StatusCode::UNAUTHORIZED), None)
}

/// Failure envelope; always 403.
pub fn forbidden<S: ResponseSink>(sink: S, message: impl Into<String>) -> S::Output {
    client_error(sink, message, Some(StatusCode::FORBIDDEN), None)
}

/// Failure envelope; always 404.
pub fn not_found<S: ResponseSink>(sink: S, message: impl Into<String>) -> S::Output {
    client_error(sink, message, Some(StatusCode::NOT_FOUND), None)
}

/// Failure envelope for a caught error; always 500.
///
/// The error's rendering lands in the body's `error` field; an empty
/// rendering falls back to [`FALLBACK_ERROR_MESSAGE`].
pub fn server_error<S: ResponseSink>(
    sink: S,
    error: impl Display,
    message: impl Into<String>,
) -> S::Output {
    let rendered = error.to_string();
    let body = Envelope::err(message, StatusCode::INTERNAL_SERVER_ERROR).with_error(
        if rendered.is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            rendered
        },
    );
    sink.set_status(StatusCode::INTERNAL_SERVER_ERROR)
        .write_json(&body)
}

/// Failure envelope for invalid input; always 422.
pub fn validation_error<S: ResponseSink>(
    sink: S,
    message: impl Into<String>,
    details: Option<Value>,
) -> S::Output {
    client_error(
        sink,
        message,
        Some(StatusCode::UNPROCESSABLE_ENTITY),
        details,
    )
}

/// Failure envelope; status defaults to 500.
pub fn generic_error<S: ResponseSink>(
    sink: S,
    message: impl Into<String>,
    status: Option<StatusCode>,
    details: Option<Value>,
) -> S::Output {
    client_error(
        sink,
        message,
        Some(status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)),
        details,
    )
}

/// Success envelope with a pagination block; status defaults to 200.
///
/// Precondition: `limit > 0`.
pub fn paginated<S: ResponseSink>(
    sink: S,
    data: Value,
    page: u64,
    limit: u64,
    total: u64,
    message: impl Into<String>,
    status: Option<StatusCode>,
) -> S::Output {
    let status = status.unwrap_or(StatusCode::OK);
    let body = Envelope::ok(message, status)
        .with_data(data)
        .with_pagination(crate::pagination::PaginationMeta::new(page, limit, total));
    sink.set_status(status).write_json(&body)
}

/// Success envelope with no payload; status defaults to 204.
pub fn no_content<S: ResponseSink>(
    sink: S,
    message: impl Into<String>,
    status: Option<StatusCode>,
) -> S::Output {
    let status = status.unwrap_or(StatusCode::NO_CONTENT);
    sink.set_status(status).write_json(&Envelope::ok(message, status))
}
