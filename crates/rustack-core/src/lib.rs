//! Core types, configuration, and errors for Rustack.
//!
//! This crate holds the pieces shared by the Redshift client, the codec CLI,
//! and the integration tests: environment-driven client configuration, the
//! region type, and the infrastructure error type.

mod config;
mod error;
mod types;

pub use config::ClientConfig;
pub use error::{RustackError, RustackResult};
pub use types::AwsRegion;
