//! XML writing driven by the same field tables the decoder reads.
//!
//! Every member is written at its XML path, so a document produced here
//! decodes back into an equal value:
//!
//! - Absent members are omitted
//! - Lists are written inside their wrapper element, one item per element
//! - An empty list is written as an empty wrapper element
//! - Scalars use the same wire text as request parameters
//!
//! Response documents follow the awsQuery envelope:
//! `<ActionResponse><ActionResult>..</ActionResult><ResponseMetadata>..`.

use std::io;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};

use crate::error::QueryResult;
use crate::schema::QueryShape;

/// Writer type used for every XML document this crate produces.
pub type XmlWriter<'a> = Writer<&'a mut Vec<u8>>;

/// Write every present member of `value` as child elements.
pub(crate) fn write_fields<T: QueryShape>(value: &T, writer: &mut XmlWriter<'_>) -> io::Result<()> {
    for field in T::fields() {
        field.write_xml(value, writer)?;
    }
    Ok(())
}

/// Open each wrapper element in turn, run `inner` inside the innermost one.
pub(crate) fn write_wrapped<F>(
    writer: &mut XmlWriter<'_>,
    wrappers: &[&str],
    inner: F,
) -> io::Result<()>
where
    F: FnOnce(&mut XmlWriter<'_>) -> io::Result<()>,
{
    match wrappers.split_first() {
        None => inner(writer),
        Some((first, rest)) => {
            writer
                .create_element(*first)
                .write_inner_content(|w| write_wrapped(w, rest, inner))?;
            Ok(())
        }
    }
}

fn write_declaration(writer: &mut XmlWriter<'_>) -> QueryResult<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    Ok(())
}

/// Serialize `value` as the children of a `root` element, with declaration.
///
/// # Errors
///
/// Returns [`QueryError::Io`](crate::QueryError::Io) if writing fails.
pub fn to_xml<T: QueryShape>(root: &str, value: &T) -> QueryResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(512);
    let mut writer = Writer::new(&mut buf);

    write_declaration(&mut writer)?;
    writer
        .create_element(root)
        .write_inner_content(|w| write_fields(value, w))?;

    Ok(buf)
}

/// Serialize `value` as the result of `action`, wrapped in the awsQuery
/// response envelope.
///
/// # Errors
///
/// Returns [`QueryError::Io`](crate::QueryError::Io) if writing fails.
pub fn response_to_xml<T: QueryShape>(
    action: &str,
    namespace: &str,
    request_id: &str,
    value: &T,
) -> QueryResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(1024);
    let mut writer = Writer::new(&mut buf);

    write_declaration(&mut writer)?;
    writer
        .create_element(format!("{action}Response"))
        .with_attribute(("xmlns", namespace))
        .write_inner_content(|w| {
            w.create_element(format!("{action}Result"))
                .write_inner_content(|w| write_fields(value, w))?;
            w.create_element("ResponseMetadata").write_inner_content(|w| {
                w.create_element("RequestId")
                    .write_text_content(BytesText::new(request_id))?;
                Ok(())
            })?;
            Ok(())
        })?;

    tracing::debug!(action, shape = T::SHAPE_NAME, bytes = buf.len(), "wrote query response");
    Ok(buf)
}
