//! A forward-only cursor over an XML document.
//!
//! [`XmlCursor`] wraps a quick-xml pull reader and keeps the stack of open
//! element names. Decoders never see a tree: they ask the cursor for the next
//! structural event, check its depth, and test the path of the element just
//! opened against their field expressions.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::{QueryError, QueryResult};

/// Structural events surfaced by the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlEvent {
    /// An element was opened; its name is on top of the path stack.
    StartElement,
    /// An element was closed; the path stack has been popped.
    EndElement,
    /// The document is exhausted.
    EndDocument,
}

/// Streaming position in an XML document.
#[derive(Debug)]
pub struct XmlCursor<'a> {
    reader: Reader<&'a [u8]>,
    stack: Vec<String>,
    started: bool,
}

impl<'a> XmlCursor<'a> {
    /// Create a cursor positioned before the first event of `xml`.
    #[must_use]
    pub fn new(xml: &'a [u8]) -> Self {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().expand_empty_elements = true;
        Self {
            reader,
            stack: Vec::new(),
            started: false,
        }
    }

    /// Number of currently open elements.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether no event has been consumed yet.
    #[must_use]
    pub fn is_start_of_document(&self) -> bool {
        !self.started
    }

    /// Local name of the innermost open element.
    #[must_use]
    pub fn current_name(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    /// Advance to the next structural event.
    ///
    /// Text, comments, declarations and processing instructions between
    /// elements are skipped.
    pub fn next_event(&mut self) -> QueryResult<XmlEvent> {
        self.started = true;
        loop {
            match self.reader.read_event()? {
                Event::Start(e) => {
                    let name = std::str::from_utf8(e.local_name().as_ref())
                        .map_err(|err| QueryError::Parse(err.to_string()))?
                        .to_owned();
                    self.stack.push(name);
                    return Ok(XmlEvent::StartElement);
                }
                Event::End(_) => {
                    self.stack.pop();
                    return Ok(XmlEvent::EndElement);
                }
                Event::Eof => {
                    if let Some(open) = self.stack.last() {
                        return Err(QueryError::UnexpectedEof(format!(
                            "element <{open}> was never closed"
                        )));
                    }
                    return Ok(XmlEvent::EndDocument);
                }
                _ => {}
            }
        }
    }

    /// Test whether the open path matches `expression` at `target_depth`.
    ///
    /// `expression` is relative to the enclosing object. Every `/` in it
    /// reaches one level deeper, so `"ImportTablesCompleted/member"` matches a
    /// `member` element at `target_depth + 1` whose parent is
    /// `ImportTablesCompleted`.
    #[must_use]
    pub fn test_expression(&self, expression: &str, target_depth: usize) -> bool {
        if expression == "." {
            return true;
        }
        let segments: Vec<&str> = expression.split('/').collect();
        let expected_depth = target_depth + segments.len() - 1;
        if expected_depth != self.depth() || segments.len() > self.stack.len() {
            return false;
        }
        let tail = &self.stack[self.stack.len() - segments.len()..];
        tail.iter().zip(&segments).all(|(open, seg)| open == seg)
    }

    /// Read the text content of the element just opened and consume its end tag.
    pub fn read_text(&mut self) -> QueryResult<String> {
        let mut text = String::new();
        loop {
            match self.reader.read_event()? {
                Event::Text(e) => {
                    let decoded = e
                        .decode()
                        .map_err(|err| QueryError::Parse(err.to_string()))?;
                    let unescaped = quick_xml::escape::unescape(&decoded)
                        .map_err(|err| QueryError::Parse(err.to_string()))?;
                    text.push_str(&unescaped);
                }
                Event::CData(e) => {
                    let decoded = e
                        .decode()
                        .map_err(|err| QueryError::Parse(err.to_string()))?;
                    text.push_str(&decoded);
                }
                Event::GeneralRef(e) => {
                    let char_ref = e
                        .resolve_char_ref()
                        .map_err(|err| QueryError::Parse(err.to_string()))?;
                    if let Some(ch) = char_ref {
                        text.push(ch);
                    } else {
                        let name = e
                            .decode()
                            .map_err(|err| QueryError::Parse(err.to_string()))?;
                        let resolved = quick_xml::escape::resolve_predefined_entity(&name)
                            .ok_or_else(|| {
                                QueryError::Parse(format!("unknown entity reference &{name};"))
                            })?;
                        text.push_str(resolved);
                    }
                }
                Event::End(_) => {
                    self.stack.pop();
                    return Ok(text);
                }
                Event::Start(e) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    return Err(QueryError::UnexpectedElement(format!(
                        "<{name}> inside a text-only element"
                    )));
                }
                Event::Eof => {
                    return Err(QueryError::UnexpectedEof(
                        "document ended while reading text content".to_owned(),
                    ));
                }
                _ => {}
            }
        }
    }
}
