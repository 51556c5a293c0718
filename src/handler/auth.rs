//! Mock authentication endpoints
//!
//! Nothing is verified against real credentials: login accepts any
//! non-empty email/password pair and the PIN is a fixed literal.

use chrono::{DateTime, Local};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::{Map, Value};

use super::payloads::{ErrorResponse, LoginResult, LoginUser, PinResult};
use crate::http::json_response;

pub const USER_TOKEN_PREFIX: &str = "python-token-";
pub const ADMIN_TOKEN_PREFIX: &str = "python-admin-";
pub const ADMIN_PIN: &str = "20031997";

/// Parse a POST body leniently
///
/// Empty bodies, invalid UTF-8, invalid JSON and JSON values that are not
/// objects all come back as an empty object.
pub fn parse_body(body: &[u8]) -> Map<String, Value> {
    if body.is_empty() {
        return Map::new();
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Non-empty string field, `None` for anything else
fn non_empty_str<'a>(data: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    data.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn issue_token(prefix: &str, now: &DateTime<Local>) -> String {
    format!("{prefix}{}", now.timestamp())
}

/// `POST /api/auth/login`
pub fn login(data: &Map<String, Value>, now: &DateTime<Local>) -> Response<Full<Bytes>> {
    match (non_empty_str(data, "email"), non_empty_str(data, "password")) {
        (Some(email), Some(_)) => json_response(
            StatusCode::OK,
            &LoginResult {
                token: issue_token(USER_TOKEN_PREFIX, now),
                user: LoginUser {
                    email: email.to_string(),
                    name: "Python Test User",
                },
                message: "Успешный вход (Python mock)",
            },
        ),
        _ => json_response(
            StatusCode::BAD_REQUEST,
            &ErrorResponse::message("Email и пароль обязательны"),
        ),
    }
}

/// `POST /api/auth/verify-pin`
pub fn verify_pin(data: &Map<String, Value>, now: &DateTime<Local>) -> Response<Full<Bytes>> {
    if data.get("pin").and_then(Value::as_str) == Some(ADMIN_PIN) {
        json_response(
            StatusCode::OK,
            &PinResult {
                token: issue_token(ADMIN_TOKEN_PREFIX, now),
                message: "PIN код верный (Python)",
            },
        )
    } else {
        json_response(
            StatusCode::BAD_REQUEST,
            &ErrorResponse::message("Неверный PIN код"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use http_body_util::BodyExt;

    async fn body_json(resp: Response<Full<Bytes>>) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn fixed_now() -> DateTime<Local> {
        Local.timestamp_opt(1_734_681_907, 0).unwrap()
    }

    #[test]
    fn test_parse_body_lenient() {
        assert!(parse_body(b"").is_empty());
        assert!(parse_body(b"not json").is_empty());
        assert!(parse_body(&[0xff, 0xfe, 0x00]).is_empty());
        assert!(parse_body(b"[1, 2]").is_empty());
        assert!(parse_body(b"\"email\"").is_empty());
        assert_eq!(parse_body(br#"{"pin":"1"}"#).len(), 1);
    }

    #[tokio::test]
    async fn test_login_success() {
        let data = parse_body(br#"{"email":"a@b.com","password":"x"}"#);
        let resp = login(&data, &fixed_now());
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["token"], "python-token-1734681907");
        assert_eq!(body["user"]["email"], "a@b.com");
        assert_eq!(body["user"]["name"], "Python Test User");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        for raw in [
            &b"{}"[..],
            br#"{"email":"a@b.com"}"#,
            br#"{"password":"x"}"#,
            br#"{"email":"","password":"x"}"#,
            br#"{"email":"a@b.com","password":""}"#,
            br#"{"email":42,"password":"x"}"#,
        ] {
            let resp = login(&parse_body(raw), &fixed_now());
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body = body_json(resp).await;
            assert!(body["error"].is_string());
            assert!(body.get("token").is_none());
        }
    }

    #[tokio::test]
    async fn test_verify_pin() {
        let resp = verify_pin(&parse_body(br#"{"pin":"20031997"}"#), &fixed_now());
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["token"], "python-admin-1734681907");
    }

    #[tokio::test]
    async fn test_verify_pin_rejects() {
        for raw in [
            &br#"{"pin":"0000"}"#[..],
            br#"{"pin":20031997}"#,
            br#"{"pin":" 20031997"}"#,
            b"{}",
            b"garbage",
        ] {
            let resp = verify_pin(&parse_body(raw), &fixed_now());
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            assert!(body_json(resp).await["error"].is_string());
        }
    }
}
