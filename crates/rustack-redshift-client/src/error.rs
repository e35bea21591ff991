//! Client error types.

use std::io;
use std::time::Duration;

use bytes::Bytes;
use rustack_query::QueryError;
use rustack_redshift_model::RedshiftOperation;

/// Failure reported by a [`Transport`](crate::Transport).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be delivered or no response was received.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The service answered with a non-success status. The body is passed
    /// through undecoded.
    #[error("service returned HTTP status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: Bytes,
    },

    /// An I/O error while sending or receiving.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors returned by [`RedshiftClient`](crate::RedshiftClient) calls.
#[derive(Debug, thiserror::Error)]
pub enum RedshiftClientError {
    /// The transport failed.
    #[error("{operation} request failed: {source}")]
    Transport {
        /// Operation being called.
        operation: RedshiftOperation,
        /// Transport error.
        #[source]
        source: TransportError,
    },

    /// The response document could not be decoded into the output shape.
    #[error("failed to decode {operation} response: {source}")]
    Decode {
        /// Operation being called.
        operation: RedshiftOperation,
        /// Codec error.
        #[source]
        source: QueryError,
    },

    /// No response arrived within the configured timeout.
    #[error("{operation} timed out after {timeout:?}")]
    Timeout {
        /// Operation being called.
        operation: RedshiftOperation,
        /// The timeout that elapsed.
        timeout: Duration,
    },
}

impl RedshiftClientError {
    /// Operation the failed call was for.
    #[must_use]
    pub fn operation(&self) -> RedshiftOperation {
        match self {
            Self::Transport { operation, .. }
            | Self::Decode { operation, .. }
            | Self::Timeout { operation, .. } => *operation,
        }
    }
}
