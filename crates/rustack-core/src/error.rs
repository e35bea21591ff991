//! Error types for the Rustack core.

/// Core error type for Rustack infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum RustackError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result type for Rustack operations.
pub type RustackResult<T> = Result<T, RustackError>;
