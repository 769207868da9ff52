//! Custom error types specific to the `adapters` crate.
//!
//! This module defines errors that can occur while calling the backend API,
//! split by failure mode so the web layer can map each one to a distinct
//! HTTP response.

use thiserror::Error;

/// Errors produced by backend API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connect failure, timeout, TLS).
    #[error("backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a status the caller does not relay.
    #[error("backend returned status {status} from {endpoint}")]
    Status { endpoint: &'static str, status: u16 },

    /// The backend answered 2xx but the body did not match the wire model.
    #[error("could not decode {endpoint} response: {message}")]
    Decode { endpoint: &'static str, message: String },
}

impl ApiError {
    /// True when the failure happened before any backend response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
