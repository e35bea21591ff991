//! Path-matching decoder: XML responses (and query parameters) to typed shapes.
//!
//! The XML decoder never builds a tree. It records the depth at which it was
//! entered, then for every element that opens it asks each field whether the
//! open path matches that field's expression at the expected depth. Scalars
//! are converted in place, nested shapes recurse with their own depth
//! tracking, and list fields append one element per match. Elements no field
//! claims are stepped over; the decoder returns as soon as the element that
//! encloses it closes.

use crate::cursor::{XmlCursor, XmlEvent};
use crate::error::QueryResult;
use crate::params::QueryParams;
use crate::schema::QueryShape;

/// Levels between the document root and the members of a response shape
/// (`<XResponse><XResult>`), skipped when decoding starts at the document.
const RESPONSE_ENVELOPE_DEPTH: usize = 2;

/// Decode a shape from the cursor's current position.
///
/// The cursor must sit on the start tag of the element holding the shape,
/// or at the very start of a response document. On return it is positioned
/// just after the closing tag, ready for the caller to continue.
///
/// # Errors
///
/// Returns a decode failure if the document is malformed or truncated, or if
/// a scalar cannot be converted. No partial value is returned.
pub fn decode_shape<T: QueryShape>(cursor: &mut XmlCursor<'_>) -> QueryResult<T> {
    let mut target = T::default();
    let original_depth = cursor.depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += RESPONSE_ENVELOPE_DEPTH;
    }

    loop {
        match cursor.next_event()? {
            XmlEvent::EndDocument => return Ok(target),
            XmlEvent::StartElement => {
                decode_member(&mut target, cursor, target_depth)?;
            }
            XmlEvent::EndElement => {
                if cursor.depth() < original_depth {
                    return Ok(target);
                }
            }
        }
    }
}

/// Offer the element just opened to each field of `T`; first match wins.
fn decode_member<T: QueryShape>(
    target: &mut T,
    cursor: &mut XmlCursor<'_>,
    target_depth: usize,
) -> QueryResult<()> {
    for field in T::fields() {
        if cursor.test_expression(field.path(), target_depth) {
            return field.decode(target, cursor);
        }
        if let Some(wrapper) = field.list_wrapper() {
            if cursor.test_expression(wrapper, target_depth) {
                field.start_list(target);
                return Ok(());
            }
        }
    }

    if cursor.depth() == target_depth {
        tracing::trace!(
            shape = T::SHAPE_NAME,
            element = cursor.current_name().unwrap_or_default(),
            "ignoring unrecognized element"
        );
    }
    Ok(())
}

/// Decode a response document into its result shape.
///
/// # Errors
///
/// Returns a decode failure if the document is malformed or truncated, or if
/// a scalar cannot be converted.
pub fn unmarshall_response<T: QueryShape>(xml: &[u8]) -> QueryResult<T> {
    let mut cursor = XmlCursor::new(xml);
    let result = decode_shape(&mut cursor);
    match &result {
        Ok(_) => tracing::debug!(shape = T::SHAPE_NAME, bytes = xml.len(), "unmarshalled query response"),
        Err(e) => tracing::debug!(shape = T::SHAPE_NAME, error = %e, "failed to unmarshall query response"),
    }
    result
}

/// Rebuild a shape from flattened parameters whose keys start with `prefix`.
///
/// List elements are read from index 1 up to the first missing index.
///
/// # Errors
///
/// Returns [`QueryError::Parse`](crate::QueryError::Parse) or
/// [`QueryError::MissingValue`](crate::QueryError::MissingValue) if a value
/// cannot be converted.
pub fn decode_params<T: QueryShape>(params: &QueryParams, prefix: &str) -> QueryResult<T> {
    let mut target = T::default();
    for field in T::fields() {
        field.decode_params(&mut target, prefix, params)?;
    }
    Ok(target)
}

/// Rebuild a request shape from the parameters of a query request.
///
/// The `Action` and `Version` selector pair is not part of the shape and is
/// ignored here.
///
/// # Errors
///
/// Returns a decode failure if a value cannot be converted.
pub fn unmarshall_request<R: QueryShape>(params: &QueryParams) -> QueryResult<R> {
    decode_params(params, "")
}
