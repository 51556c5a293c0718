//! HTTP response building module
//!
//! Every response leaves here with the permissive CORS header set attached.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::response::Builder;
use hyper::{Response, StatusCode};
use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type, Authorization, Accept, Origin, X-Requested-With";
/// Preflight cache lifetime in seconds (20 days)
pub const CORS_MAX_AGE: &str = "1728000";

/// Attach the CORS headers shared by every response
fn with_cors(builder: Builder) -> Builder {
    builder
        .header("Access-Control-Allow-Origin", CORS_ALLOW_ORIGIN)
        .header("Access-Control-Allow-Methods", CORS_ALLOW_METHODS)
        .header("Access-Control-Allow-Headers", CORS_ALLOW_HEADERS)
}

/// Build pretty-printed JSON response
///
/// Non-ASCII text is written as-is, indent is two spaces.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string_pretty(body) {
        Ok(j) => j,
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            return build_500_response();
        }
    };

    with_cors(Response::builder())
        .status(status)
        .header("Content-Type", JSON_CONTENT_TYPE)
        .header("Content-Length", json.len())
        .header("Access-Control-Allow-Credentials", "false")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response() -> Response<Full<Bytes>> {
    with_cors(Response::builder())
        .status(StatusCode::NO_CONTENT)
        .header("Access-Control-Max-Age", CORS_MAX_AGE)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 500 Internal Server Error response
fn build_500_response() -> Response<Full<Bytes>> {
    const BODY: &str = r#"{"error":"Internal server error"}"#;
    with_cors(Response::builder())
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header("Content-Type", JSON_CONTENT_TYPE)
        .header("Access-Control-Allow-Credentials", "false")
        .body(Full::new(Bytes::from_static(BODY.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from_static(BODY.as_bytes())))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
