//! Request handler module
//!
//! The mock endpoints: routing dispatch, canned payloads and the auth mocks.

pub mod auth;
pub mod payloads;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
