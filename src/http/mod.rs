//! HTTP protocol layer module
//!
//! JSON and preflight response builders, decoupled from the mock endpoints.

pub mod response;

// Re-export commonly used items
pub use response::{build_options_response, json_response};
