//! Scalar conversions between Rust values and awsQuery wire text.
//!
//! The same text form is used in both directions: request parameters are
//! written with [`ScalarValue::to_wire`] and XML response text is read with
//! [`ScalarValue::from_wire`].
//!
//! - Integers and longs: plain decimal, no grouping
//! - Doubles: shortest text that parses back to the same value, with
//!   `Infinity`, `-Infinity` and `NaN` for non-finite values
//! - Booleans: lowercase `true`/`false`
//! - Timestamps: ISO 8601 in UTC with milliseconds (`2013-01-01T12:00:00.000Z`),
//!   widened to micro- or nanoseconds when the instant carries them

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};

use crate::error::{QueryError, QueryResult};

/// Wire format used for every timestamp in the schema.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Timestamp format for instants with sub-millisecond digits.
const PRECISE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Scalar type tags carried by field descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// UTF-8 text.
    String,
    /// Signed 32-bit integer.
    Integer,
    /// Signed 64-bit integer.
    Long,
    /// IEEE-754 double.
    Double,
    /// `true` / `false`.
    Boolean,
    /// UTC instant.
    Timestamp,
}

impl ScalarType {
    /// Returns the lowercase name of this scalar type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value that converts to and from its wire text.
pub trait ScalarValue: Sized + Clone + fmt::Debug + Send + Sync + 'static {
    /// The type tag recorded on descriptors of fields holding this value.
    const TYPE: ScalarType;

    /// Render the value as wire text.
    fn to_wire(&self) -> String;

    /// Parse wire text into a value.
    ///
    /// Empty text is rejected for every type except `String`: presence is
    /// decided by path matching, never by lenient conversion.
    fn from_wire(text: &str) -> QueryResult<Self>;
}

/// Trim surrounding whitespace and reject empty text.
fn non_empty(text: &str, ty: ScalarType) -> QueryResult<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(QueryError::MissingValue(ty));
    }
    Ok(trimmed)
}

impl ScalarValue for String {
    const TYPE: ScalarType = ScalarType::String;

    fn to_wire(&self) -> String {
        self.clone()
    }

    fn from_wire(text: &str) -> QueryResult<Self> {
        Ok(text.to_owned())
    }
}

impl ScalarValue for i32 {
    const TYPE: ScalarType = ScalarType::Integer;

    fn to_wire(&self) -> String {
        self.to_string()
    }

    fn from_wire(text: &str) -> QueryResult<Self> {
        let s = non_empty(text, Self::TYPE)?;
        s.parse::<i32>()
            .map_err(|e| QueryError::Parse(format!("invalid integer '{s}': {e}")))
    }
}

impl ScalarValue for i64 {
    const TYPE: ScalarType = ScalarType::Long;

    fn to_wire(&self) -> String {
        self.to_string()
    }

    fn from_wire(text: &str) -> QueryResult<Self> {
        let s = non_empty(text, Self::TYPE)?;
        s.parse::<i64>()
            .map_err(|e| QueryError::Parse(format!("invalid long '{s}': {e}")))
    }
}

impl ScalarValue for f64 {
    const TYPE: ScalarType = ScalarType::Double;

    fn to_wire(&self) -> String {
        if self.is_infinite() {
            return if self.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_owned();
        }
        self.to_string()
    }

    fn from_wire(text: &str) -> QueryResult<Self> {
        let s = non_empty(text, Self::TYPE)?;
        s.parse::<f64>()
            .map_err(|e| QueryError::Parse(format!("invalid double '{s}': {e}")))
    }
}

impl ScalarValue for bool {
    const TYPE: ScalarType = ScalarType::Boolean;

    fn to_wire(&self) -> String {
        if *self { "true" } else { "false" }.to_owned()
    }

    fn from_wire(text: &str) -> QueryResult<Self> {
        let s = non_empty(text, Self::TYPE)?;
        Ok(s.eq_ignore_ascii_case("true"))
    }
}

impl ScalarValue for DateTime<Utc> {
    const TYPE: ScalarType = ScalarType::Timestamp;

    fn to_wire(&self) -> String {
        let format = if self.nanosecond() % 1_000_000 == 0 {
            TIMESTAMP_FORMAT
        } else {
            PRECISE_TIMESTAMP_FORMAT
        };
        self.format(format).to_string()
    }

    fn from_wire(text: &str) -> QueryResult<Self> {
        let s = non_empty(text, Self::TYPE)?;
        DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|_| {
                NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.fZ").map(|ndt| ndt.and_utc())
            })
            .map_err(|e| QueryError::Parse(format!("invalid timestamp '{s}': {e}")))
    }
}
