//! Client configuration.
//!
//! All configuration is driven by environment variables:
//!
//! | Variable                | Default                     |
//! |-------------------------|-----------------------------|
//! | `REDSHIFT_ENDPOINT_URL` | regional public endpoint    |
//! | `DEFAULT_REGION`        | `us-east-1`                 |
//! | `LOG_LEVEL`             | `info`                      |
//! | `REQUEST_TIMEOUT_MS`    | `30000`                     |

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::{RustackError, RustackResult};
use crate::types::AwsRegion;

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Configuration for a Redshift client.
///
/// # Examples
///
/// ```
/// use rustack_core::{AwsRegion, ClientConfig};
///
/// let config = ClientConfig::builder()
///     .default_region(AwsRegion::new("eu-west-1"))
///     .build();
/// assert_eq!(config.endpoint(), "https://redshift.eu-west-1.amazonaws.com/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Endpoint override (e.g. a local emulator). `None` targets the
    /// regional public endpoint.
    #[builder(default, setter(strip_option, into))]
    pub endpoint_url: Option<String>,

    /// AWS region requests are sent to.
    #[builder(default)]
    pub default_region: AwsRegion,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,

    /// Per-request timeout in milliseconds.
    #[builder(default = DEFAULT_TIMEOUT_MS)]
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            default_region: AwsRegion::default(),
            log_level: String::from("info"),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns [`RustackError::Config`] if a variable is set to an invalid value.
    pub fn from_env() -> RustackResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns [`RustackError::Config`] if a value is invalid.
    pub fn from_lookup<F>(lookup: F) -> RustackResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("REDSHIFT_ENDPOINT_URL").filter(|v| !v.is_empty()) {
            config.endpoint_url = Some(v);
        }
        if let Some(v) = lookup("DEFAULT_REGION") {
            config.default_region = AwsRegion::parse(&v)?;
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }
        if let Some(v) = lookup("REQUEST_TIMEOUT_MS") {
            config.request_timeout_ms = v.parse().map_err(|e| {
                RustackError::Config(format!("invalid REQUEST_TIMEOUT_MS '{v}': {e}"))
            })?;
        }

        tracing::debug!(
            endpoint = %config.endpoint(),
            region = %config.default_region,
            timeout_ms = config.request_timeout_ms,
            "loaded client configuration"
        );
        Ok(config)
    }

    /// Endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.endpoint_url
            .clone()
            .unwrap_or_else(|| self.default_region.redshift_endpoint())
    }

    /// Per-request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
