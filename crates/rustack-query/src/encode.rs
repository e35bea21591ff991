//! Flattening encoder: typed shapes to ordered query parameters.
//!
//! Keys are built from wire names joined with dots. Nested shapes extend the
//! prefix (`Endpoint.Address`), list elements add a 1-based index
//! (`Tags.1.Key`) or a `member`-qualified index
//! (`ClusterNodes.member.1.NodeRole`) depending on the field. Absent members
//! emit nothing, including their whole subtree.

use crate::error::{QueryError, QueryResult};
use crate::params::{ACTION_KEY, QueryParams, VERSION_KEY};
use crate::schema::QueryShape;

/// Append the parameters of `value` to `out`, every key prefixed by `prefix`.
pub fn encode_shape<T: QueryShape>(value: &T, prefix: &str, out: &mut QueryParams) {
    for field in T::fields() {
        field.encode(value, prefix, out);
    }
}

/// Encode `value` into a fresh parameter sequence with no prefix.
#[must_use]
pub fn to_params<T: QueryShape>(value: &T) -> QueryParams {
    let mut params = QueryParams::new();
    encode_shape(value, "", &mut params);
    params
}

/// Encode a complete request.
///
/// The operation selector pair (`Action`, `Version`) is written first, then
/// the request's own members.
#[must_use]
pub fn encode_request<R: QueryShape>(request: &R, action: &str, version: &str) -> QueryParams {
    let mut params = QueryParams::new();
    params.push(ACTION_KEY, action);
    params.push(VERSION_KEY, version);
    encode_shape(request, "", &mut params);

    tracing::debug!(
        action,
        shape = R::SHAPE_NAME,
        params = params.len(),
        "marshalled query request"
    );
    params
}

/// Encode a request that may be absent.
///
/// # Errors
///
/// Returns [`QueryError::InvalidArgument`] when `request` is `None`; nothing
/// is produced in that case.
pub fn marshall_request<R: QueryShape>(
    request: Option<&R>,
    action: &str,
    version: &str,
) -> QueryResult<QueryParams> {
    let request = request.ok_or_else(|| {
        QueryError::InvalidArgument(format!(
            "invalid argument passed to marshall({})",
            R::SHAPE_NAME
        ))
    })?;
    Ok(encode_request(request, action, version))
}
