//! Boundary to the back-office REST API.
//!
//! Every response goes through one decoding path: HTTP status first
//! ([`ApiError::from_status`]), then the optional `{success, data}` envelope
//! ([`unwrap_envelope`]), so callers only ever see `Result<T, ApiError>`.

mod client;
mod envelope;
mod error;
mod http_transport;
mod transport;

pub use client::ApiClient;
pub use envelope::{decode, unwrap_envelope};
pub use error::ApiError;
pub use http_transport::HttpTransport;
pub use transport::{ApiRequest, ApiResponse, Transport, TransportError};

/// Prefix of every admin endpoint.
pub const ADMIN_PREFIX: &str = "/api/admin";

#[cfg(test)]
#[path = "../api_tests.rs"]
mod api_tests;
