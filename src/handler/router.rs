//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: reads the body for POST,
//! matches `(method, path)` and hands off to the canned responses.

use crate::config::AppState;
use crate::handler::auth;
use crate::handler::payloads::{
    ErrorResponse, HealthStatus, ServerInfo, TestProbe, AVAILABLE_ENDPOINTS, EQUIPMENT,
};
use crate::http;
use crate::logger;
use chrono::Local;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, body) = req.into_parts();

    let body = if parts.method == Method::POST {
        match body.collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(e) => {
                // Unreadable bodies are handled like empty ones
                logger::log_warning(&format!("Failed to read request body: {e}"));
                Bytes::new()
            }
        }
    } else {
        Bytes::new()
    };

    Ok(dispatch(&parts.method, parts.uri.path(), &body, &state))
}

/// Route a request that has already been read off the connection
pub fn dispatch(method: &Method, path: &str, body: &[u8], state: &AppState) -> Response<Full<Bytes>> {
    let access_log = state.config.logging.access_log;

    match *method {
        Method::GET => {
            if access_log {
                logger::log_request(method.as_str(), path);
            }
            route_get(path, state)
        }
        Method::POST => {
            let data = auth::parse_body(body);
            if access_log {
                logger::log_post_request(path, &serde_json::Value::Object(data.clone()));
            }
            route_post(path, &data)
        }
        Method::OPTIONS => {
            if access_log {
                logger::log_request(method.as_str(), path);
            }
            http::build_options_response()
        }
        _ => {
            if access_log {
                logger::log_request(method.as_str(), path);
            }
            logger::log_warning(&format!("Method not implemented: {method}"));
            http::json_response(
                StatusCode::NOT_IMPLEMENTED,
                &ErrorResponse::with_path("Метод не поддерживается", path),
            )
        }
    }
}

fn route_get(path: &str, state: &AppState) -> Response<Full<Bytes>> {
    let port = state.config.server.port;
    match path {
        "/api/health" => http::json_response(
            StatusCode::OK,
            &HealthStatus::new(&Local::now(), &state.config.server.label, port),
        ),
        "/" | "/api" => http::json_response(StatusCode::OK, &ServerInfo::new(port)),
        "/api/equipment" => http::json_response(StatusCode::OK, &EQUIPMENT),
        "/api/test" => http::json_response(StatusCode::OK, &TestProbe::new(&Local::now())),
        _ => http::json_response(
            StatusCode::NOT_FOUND,
            &ErrorResponse::with_path("Endpoint не найден", path)
                .with_available(&AVAILABLE_ENDPOINTS),
        ),
    }
}

fn route_post(path: &str, data: &serde_json::Map<String, serde_json::Value>) -> Response<Full<Bytes>> {
    match path {
        "/api/auth/login" => auth::login(data, &Local::now()),
        "/api/auth/verify-pin" => auth::verify_pin(data, &Local::now()),
        _ => http::json_response(
            StatusCode::NOT_FOUND,
            &ErrorResponse::with_path("POST endpoint не найден", path),
        ),
    }
}
