//! awsQuery wire codec for `Rustack`.
//!
//! Requests travel as flat, ordered `key=value` form parameters; responses
//! come back as XML. Both directions are driven by one table of field
//! descriptors per shape, declared with [`query_shape!`].
//!
//! # Key components
//!
//! - [`marshall_request`] flattens a request into [`QueryParams`], selector pair first
//! - [`unmarshall_response`] decodes a response document by streaming path matching
//! - [`unmarshall_request`] and [`response_to_xml`] are the inverse pair, for
//!   servers and test doubles
//! - [`ScalarValue`] converts string, integer, long, double, boolean and
//!   timestamp members to and from wire text
//!
//! # Wire conventions
//!
//! - Nested members: `Parent.Child`
//! - Lists: `Name.1` or `Name.member.1`, 1-based, chosen per field
//! - Booleans: lowercase `true`/`false`
//! - Timestamps: ISO 8601 (`2013-01-02T03:04:05.000Z`)

pub mod cursor;
pub mod decode;
pub mod encode;
pub mod error;
pub mod params;
pub mod scalar;
pub mod schema;
pub mod serialize;

pub use cursor::{XmlCursor, XmlEvent};
pub use decode::{decode_params, decode_shape, unmarshall_request, unmarshall_response};
pub use encode::{encode_request, encode_shape, marshall_request, to_params};
pub use error::{QueryError, QueryResult};
pub use params::{ACTION_KEY, QueryParams, VERSION_KEY};
pub use scalar::{ScalarType, ScalarValue, TIMESTAMP_FORMAT};
pub use schema::{ElementKind, Field, FieldKind, ListStyle, QueryShape, duplicate_field_name};
pub use serialize::{XmlWriter, response_to_xml, to_xml};
