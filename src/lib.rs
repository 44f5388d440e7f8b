//! Standardized JSON response envelopes for axum services.
//!
//! Every response carries the same body shape: a `success` flag, a
//! human-readable `message`, optional `data`/`details`/`error` payloads, an
//! optional `pagination` block, and the HTTP `status` mirrored into the
//! body. The [`reply`] module holds the formatter operations, generic over
//! the [`ResponseSink`] seam; [`AxumSink`] adapts them to axum, and
//! [`ApiError`] lets fallible handlers answer through the same envelopes.
//!
//! ```no_run
//! use api_envelope::{reply, AxumSink};
//! use axum::response::Response;
//! use serde_json::json;
//!
//! async fn show_widget() -> Response {
//!     reply::success(
//!         AxumSink::new(),
//!         reply::SUCCESS_MESSAGE,
//!         Some(json!({"id": 42})),
//!         None,
//!     )
//! }
//! ```

pub mod envelope;
pub mod error;
pub mod pagination;
pub mod reply;
pub mod sink;

pub use envelope::Envelope;
pub use error::{ApiError, ApiResult};
pub use pagination::{PaginationMeta, PaginationParams};
pub use sink::{AxumSink, ResponseSink};
