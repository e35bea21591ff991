//! The transport seam between the client and the network.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use rustack_query::QueryParams;
use rustack_redshift_model::RedshiftOperation;

use crate::error::TransportError;

/// Content type of awsQuery request bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// Future returned by [`Transport::send`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Bytes, TransportError>> + Send + 'a>>;

/// A flattened request, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    /// Operation being called. Also present in `params` as `Action`.
    pub operation: RedshiftOperation,
    /// Endpoint the request targets.
    pub endpoint: String,
    /// Request parameters, selector pair first.
    pub params: QueryParams,
}

impl QueryRequest {
    /// Form-encoded request body.
    #[must_use]
    pub fn body(&self) -> Bytes {
        Bytes::from(self.params.to_form_body())
    }
}

/// Executes a request and returns the raw response document.
///
/// Implementations own everything on the wire: connection handling,
/// signing, retries and mapping of service faults.
pub trait Transport: Send + Sync + 'static {
    /// Send `request` and return the response body.
    fn send(&self, request: QueryRequest) -> TransportFuture<'_>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: QueryRequest) -> TransportFuture<'_> {
        (**self).send(request)
    }
}
