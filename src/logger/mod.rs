//! Logger module
//!
//! Provides logging utilities for the mock server including:
//! - Startup banner and shutdown notice
//! - Per-request lines
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::RequestLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    let rule = "=".repeat(60);
    write_info(&rule);
    write_info("🐍 RentAdmin Python Test Server");
    write_info(&format!("📡 Порт: {}", addr.port()));
    write_info(&format!("🌐 URL: http://{addr}"));
    write_info(&format!("🔗 Health: {}/api/health", config.public_url()));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info(&rule);
    write_info(&format!("✅ Сервер запущен на порту {}", addr.port()));
    write_info("Нажмите Ctrl+C для остановки");
}

pub fn log_shutdown() {
    write_info("\n🛑 Сервер остановлен");
}

/// Log a request line, `[HH:MM:SS] METHOD /path`
pub fn log_request(method: &str, path: &str) {
    write_info(&RequestLogEntry::new(method, path).format());
}

/// Log a POST request line together with its parsed body
pub fn log_post_request(path: &str, data: &serde_json::Value) {
    write_info(&RequestLogEntry::new("POST", path).with_data(data.clone()).format());
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("❌ Ошибка: {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}
