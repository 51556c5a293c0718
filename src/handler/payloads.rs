//! Canned response bodies
//!
//! Field order here is the key order on the wire.

use chrono::{DateTime, Local};
use serde::Serialize;

/// Paths listed in GET 404 bodies
pub const AVAILABLE_ENDPOINTS: [&str; 4] = ["/api/health", "/api/equipment", "/api/test", "/"];

/// Naive local ISO-8601 timestamp with microseconds, e.g. `2024-12-20T09:05:07.123456`
pub fn iso_timestamp(now: &DateTime<Local>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
    pub server: String,
    pub port: u16,
    pub message: &'static str,
}

impl HealthStatus {
    pub fn new(now: &DateTime<Local>, server: &str, port: u16) -> Self {
        Self {
            status: "ok",
            timestamp: iso_timestamp(now),
            server: server.to_string(),
            port,
            message: "RentAdmin Python API работает!",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EndpointIndex {
    pub health: &'static str,
    pub auth: &'static str,
    pub equipment: &'static str,
    pub test: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub message: &'static str,
    pub status: &'static str,
    pub port: u16,
    pub endpoints: EndpointIndex,
}

impl ServerInfo {
    pub const fn new(port: u16) -> Self {
        Self {
            message: "RentAdmin Python Test Server",
            status: "running",
            port,
            endpoints: EndpointIndex {
                health: "/api/health",
                auth: "/api/auth/login",
                equipment: "/api/equipment",
                test: "/api/test",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    Available,
    Rented,
}

#[derive(Debug, Serialize)]
pub struct EquipmentItem {
    pub id: u32,
    pub name: &'static str,
    pub status: EquipmentStatus,
    pub price: u32,
}

/// The equipment list, identical for every request
pub const EQUIPMENT: [EquipmentItem; 2] = [
    EquipmentItem {
        id: 1,
        name: "Дрель Python",
        status: EquipmentStatus::Available,
        price: 500,
    },
    EquipmentItem {
        id: 2,
        name: "Миксер Python",
        status: EquipmentStatus::Rented,
        price: 800,
    },
];

#[derive(Debug, Serialize)]
pub struct TestProbe {
    pub test: &'static str,
    pub server: &'static str,
    pub time: String,
    pub working: bool,
}

impl TestProbe {
    pub fn new(now: &DateTime<Local>) -> Self {
        Self {
            test: "success",
            server: "Python",
            time: iso_timestamp(now),
            working: true,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub email: String,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginResult {
    pub token: String,
    pub user: LoginUser,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PinResult {
    pub token: String,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<&'static [&'static str]>,
}

impl ErrorResponse {
    pub const fn message(error: &'static str) -> Self {
        Self {
            error,
            path: None,
            available: None,
        }
    }

    pub fn with_path(error: &'static str, path: &str) -> Self {
        Self {
            error,
            path: Some(path.to_string()),
            available: None,
        }
    }

    #[must_use]
    pub fn with_available(mut self, available: &'static [&'static str]) -> Self {
        self.available = Some(available);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_iso_timestamp_shape() {
        let now = Local.with_ymd_and_hms(2024, 12, 20, 9, 5, 7).unwrap();
        assert_eq!(iso_timestamp(&now), "2024-12-20T09:05:07.000000");
    }

    #[test]
    fn test_equipment_serialization() {
        let value = serde_json::to_value(EQUIPMENT).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"id": 1, "name": "Дрель Python", "status": "available", "price": 500},
                {"id": 2, "name": "Миксер Python", "status": "rented", "price": 800}
            ])
        );
    }

    #[test]
    fn test_error_response_skips_empty_fields() {
        let value = serde_json::to_value(ErrorResponse::message("nope")).unwrap();
        assert_eq!(value, serde_json::json!({"error": "nope"}));

        let value = serde_json::to_value(
            ErrorResponse::with_path("nope", "/x").with_available(&AVAILABLE_ENDPOINTS),
        )
        .unwrap();
        assert_eq!(value["path"], "/x");
        assert_eq!(value["available"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_server_info_key_order() {
        let json = serde_json::to_string(&ServerInfo::new(8080)).unwrap();
        let message = json.find("\"message\"").unwrap();
        let endpoints = json.find("\"endpoints\"").unwrap();
        assert!(message < endpoints);
    }
}
