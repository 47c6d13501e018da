//! Error types for the todo API client.
//!
//! # Design
//! Every failure the client can observe is a `TransportError`: the transport
//! owns request execution, status interpretation and body (de)serialization,
//! and the client hands its errors back to the caller untouched. A 404 is a
//! plain `Status` error; `is_not_found` is the way to ask for it.

use thiserror::Error;

/// Errors returned by transports and, unchanged, by `TodoClient` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request never produced a response (connect failure, timeout,
    /// broken body stream).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Encode(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Decode(String),
}

impl TransportError {
    /// The HTTP status behind this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Invalid client configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?} is not an unsigned integer")]
    InvalidNumber { key: &'static str, value: String },

    #[error("invalid {key}: must be greater than zero")]
    Zero { key: &'static str },

    #[error("base url must not be empty")]
    EmptyBaseUrl,

    #[error("invalid base url {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },
}
