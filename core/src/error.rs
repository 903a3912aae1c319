//! Error types for the book API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers distinguish "the book
//! does not exist" from "the server returned an unexpected status". It is only
//! produced by single-resource operations. A request that never got a
//! response at all is `NetworkUnreachable` and carries no status.

use thiserror::Error;

use crate::types::BookId;

/// Errors returned by `BookClient` parse methods and `RecordApi` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The transport never completed the round trip.
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    /// The server returned 404 for a single-resource operation.
    #[error("book {id} not found")]
    NotFound { id: BookId },

    /// The server returned a non-2xx status (other than a mapped 404).
    #[error("request failed: HTTP {status} {status_text}")]
    RequestFailed { status: u16, status_text: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Short, stable name of the variant, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::NetworkUnreachable(_) => "network_unreachable",
            ApiError::NotFound { .. } => "not_found",
            ApiError::RequestFailed { .. } => "request_failed",
            ApiError::Deserialization(_) => "deserialization",
            ApiError::Serialization(_) => "serialization",
        }
    }
}

/// A transport-level failure: connection refused, DNS, TLS, I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::NetworkUnreachable(err.message)
    }
}

