//! Typed Redshift client for Rustack.
//!
//! [`RedshiftClient`] flattens a typed input into awsQuery parameters, hands
//! them to a [`Transport`], and decodes the returned XML into the typed
//! output. The transport owns everything on the network side: URLs, headers,
//! signing and retries.

mod client;
mod error;
mod transport;

pub use client::RedshiftClient;
pub use error::{RedshiftClientError, TransportError};
pub use transport::{FORM_CONTENT_TYPE, QueryRequest, Transport, TransportFuture};
