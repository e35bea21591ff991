//! Redshift model types for Rustack.
//!
//! Every request and result shape of the supported operations, with the
//! awsQuery field tables that drive [`rustack_query`]. Shapes also derive
//! serde, keyed by their wire names, so the same values can be read from and
//! written to JSON.
#![allow(clippy::doc_markdown)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

#[macro_use]
mod macros;

pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use operations::{Operation, OperationVisitor, RedshiftOperation};

/// API version sent with every request.
pub const API_VERSION: &str = "2012-12-01";

/// XML namespace of response documents.
pub const XML_NAMESPACE: &str = "http://redshift.amazonaws.com/doc/2012-12-01/";
