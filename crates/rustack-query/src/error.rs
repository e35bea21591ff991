//! Error types for the awsQuery codec.
//!
//! Encoding only ever fails on a missing top-level request. Every other
//! variant is a decode failure: the document or one of its scalar values
//! could not be turned into the requested shape, and no partial value is
//! handed back to the caller.

use std::io;

use crate::scalar::ScalarType;

/// Errors that can occur while encoding a request or decoding a response.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The top-level value handed to the encoder was absent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The document ended while elements were still open.
    #[error("unexpected end of document: {0}")]
    UnexpectedEof(String),

    /// An element appeared where only text was allowed.
    #[error("unexpected XML element: {0}")]
    UnexpectedElement(String),

    /// A scalar element was present but carried no text.
    #[error("missing {0} value")]
    MissingValue(ScalarType),

    /// Text content could not be converted to the expected scalar type.
    #[error("failed to parse value: {0}")]
    Parse(String),
}

impl QueryError {
    /// Whether this error was raised while decoding (as opposed to encoding).
    #[must_use]
    pub fn is_decode_failure(&self) -> bool {
        !matches!(self, Self::InvalidArgument(_) | Self::Io(_))
    }
}

/// Convenience result type for codec operations.
pub type QueryResult<T> = Result<T, QueryError>;
