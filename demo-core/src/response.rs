//! JSON response helpers shared by every service.
//!
//! Handlers build their responses through [`write_json`] so that the
//! content type, status and body are always produced the same way.

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::Response;
use serde::{Deserialize, Serialize};

pub const APPLICATION_JSON: &str = "application/json";

/// The `{"error": message}` envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Serialize `value` as the response body with the given status.
///
/// The content type is always `application/json`. If serialization fails the
/// status and header are still sent with an empty body.
pub fn write_json<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Response {
    let body = match serde_json::to_vec(value) {
        Ok(mut bytes) => {
            bytes.push(b'\n');
            bytes
        }
        Err(e) => {
            tracing::warn!(%e, %status, "Failed to serialize response body");
            Vec::new()
        }
    };

    let mut response = Response::new(Body::from(body));
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    *response.status_mut() = status;
    response
}

pub fn write_error(status: StatusCode, message: impl Into<String>) -> Response {
    write_json(
        status,
        &ErrorBody {
            error: message.into(),
        },
    )
}
