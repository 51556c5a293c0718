//! Request log line formatting
//!
//! Every request produces one line: `[HH:MM:SS] METHOD /path`.
//! POST requests append the parsed body: ` - Data: {...}`.

use chrono::{DateTime, Local};

/// Request log entry
#[derive(Debug, Clone)]
pub struct RequestLogEntry {
    /// Time the request was received
    pub time: DateTime<Local>,
    pub method: String,
    /// Request path without the query string
    pub path: String,
    /// Parsed request body, POST only
    pub data: Option<serde_json::Value>,
}

impl RequestLogEntry {
    /// Create a new entry stamped with the current local time
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            time: Local::now(),
            method: method.to_string(),
            path: path.to_string(),
            data: None,
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn format(&self) -> String {
        let mut line = format!(
            "[{}] {} {}",
            self.time.format("%H:%M:%S"),
            self.method,
            self.path
        );
        if let Some(data) = &self.data {
            line.push_str(&format!(" - Data: {data}"));
        }
        line
    }
}
