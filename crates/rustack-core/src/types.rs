//! Common AWS type definitions.

use std::fmt;

use crate::error::{RustackError, RustackResult};

/// AWS Region identifier (`us-east-1`, `eu-west-2`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AwsRegion(String);

impl AwsRegion {
    /// Region used when none is configured.
    pub const DEFAULT: &str = "us-east-1";

    /// Create a region without validation.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// Parse a region name.
    ///
    /// # Errors
    /// Returns [`RustackError::Config`] if the name is empty or contains
    /// anything other than lowercase letters, digits and dashes.
    pub fn parse(region: &str) -> RustackResult<Self> {
        let valid = !region.is_empty()
            && region
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid {
            return Err(RustackError::Config(format!("invalid AWS region: '{region}'")));
        }
        Ok(Self(region.to_owned()))
    }

    /// Get the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Public Redshift endpoint for this region.
    #[must_use]
    pub fn redshift_endpoint(&self) -> String {
        format!("https://redshift.{}.amazonaws.com/", self.0)
    }
}

impl Default for AwsRegion {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
