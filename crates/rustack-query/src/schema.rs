//! Field descriptors: the schema that drives encoding and decoding.
//!
//! Every shape lists its members once, in wire order, as a table of
//! [`Field`] values. The table is built on first use and shared read-only by
//! every encode and decode call afterwards. Use [`query_shape!`] to declare
//! the table next to the struct it describes.
//!
//! [`query_shape!`]: crate::query_shape

use std::borrow::Cow;
use std::fmt;
use std::io;
use std::marker::PhantomData;

use quick_xml::events::BytesText;

use crate::cursor::XmlCursor;
use crate::error::QueryResult;
use crate::params::QueryParams;
use crate::scalar::{ScalarType, ScalarValue};
use crate::serialize::{XmlWriter, write_fields, write_wrapped};
use crate::{decode, encode};

/// A struct whose members are described by a field table.
pub trait QueryShape: Default + fmt::Debug + Send + Sync + 'static {
    /// Name of the shape, as it appears in the service model.
    const SHAPE_NAME: &'static str;

    /// The field table, in declaration order.
    fn fields() -> &'static [Field<Self>];
}

/// How list elements are keyed in request parameters.
///
/// The convention is fixed per field by the service model; both appear in
/// the same API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListStyle {
    /// `Name.1`, `Name.2`, ...
    Indexed,
    /// `Name.member.1`, `Name.member.2`, ...
    Member,
}

impl ListStyle {
    /// Parameter key of the element at 1-based `index` under `key`.
    #[must_use]
    pub fn element_key(self, key: &str, index: usize) -> String {
        match self {
            Self::Indexed => format!("{key}.{index}"),
            Self::Member => format!("{key}.member.{index}"),
        }
    }
}

/// Kind of a single list element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A scalar element.
    Scalar(ScalarType),
    /// A nested shape, by name.
    Structure(&'static str),
}

/// Kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A single scalar.
    Scalar(ScalarType),
    /// A single nested shape, by name.
    Structure(&'static str),
    /// A list of scalars or nested shapes.
    List {
        /// What each element is.
        element: ElementKind,
        /// How elements are keyed in request parameters.
        style: ListStyle,
    },
}

/// Descriptor of one member of a shape.
pub struct Field<T: 'static> {
    name: &'static str,
    path: Cow<'static, str>,
    kind: FieldKind,
    access: Box<dyn Access<T>>,
}

impl<T: 'static> Field<T> {
    /// A scalar member.
    pub fn scalar<V: ScalarValue>(
        name: &'static str,
        get: fn(&T) -> &Option<V>,
        get_mut: fn(&mut T) -> &mut Option<V>,
    ) -> Self {
        Self {
            name,
            path: Cow::Borrowed(name),
            kind: FieldKind::Scalar(V::TYPE),
            access: Box::new(ValueAccess::<T, V, ScalarCodec>::new(get, get_mut)),
        }
    }

    /// A nested shape member.
    pub fn structure<V: QueryShape>(
        name: &'static str,
        get: fn(&T) -> &Option<V>,
        get_mut: fn(&mut T) -> &mut Option<V>,
    ) -> Self {
        Self {
            name,
            path: Cow::Borrowed(name),
            kind: FieldKind::Structure(V::SHAPE_NAME),
            access: Box::new(ValueAccess::<T, V, ShapeCodec>::new(get, get_mut)),
        }
    }

    /// A list of scalars. Elements are read from `<name><member>` unless
    /// overridden with [`Field::at`].
    pub fn scalar_list<V: ScalarValue>(
        name: &'static str,
        style: ListStyle,
        get: fn(&T) -> &Option<Vec<V>>,
        get_mut: fn(&mut T) -> &mut Option<Vec<V>>,
    ) -> Self {
        Self {
            name,
            path: Cow::Owned(format!("{name}/member")),
            kind: FieldKind::List {
                element: ElementKind::Scalar(V::TYPE),
                style,
            },
            access: Box::new(ListAccess::<T, V, ScalarCodec>::new(style, get, get_mut)),
        }
    }

    /// A list of nested shapes. Elements are read from `<name><member>`
    /// unless overridden with [`Field::at`].
    pub fn structure_list<V: QueryShape>(
        name: &'static str,
        style: ListStyle,
        get: fn(&T) -> &Option<Vec<V>>,
        get_mut: fn(&mut T) -> &mut Option<Vec<V>>,
    ) -> Self {
        Self {
            name,
            path: Cow::Owned(format!("{name}/member")),
            kind: FieldKind::List {
                element: ElementKind::Structure(V::SHAPE_NAME),
                style,
            },
            access: Box::new(ListAccess::<T, V, ShapeCodec>::new(style, get, get_mut)),
        }
    }

    /// Override the XML path expression used to locate this member.
    #[must_use]
    pub fn at(mut self, path: &'static str) -> Self {
        self.path = Cow::Borrowed(path);
        self
    }

    /// Wire name, used as the parameter key segment.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// XML path expression, relative to the enclosing element.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Kind of this member.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Whether `target` holds a value for this member.
    #[must_use]
    pub fn is_present(&self, target: &T) -> bool {
        self.access.is_present(target)
    }

    /// Element wrapping the items of a list member (`Tags` for `Tags/Tag`).
    #[must_use]
    pub fn list_wrapper(&self) -> Option<&str> {
        match self.kind {
            FieldKind::List { .. } => self.path.rsplit_once('/').map(|(wrapper, _)| wrapper),
            _ => None,
        }
    }

    pub(crate) fn encode(&self, target: &T, prefix: &str, out: &mut QueryParams) {
        if !self.access.is_present(target) {
            return;
        }
        let key = format!("{prefix}{}", self.name);
        self.access.encode(target, &key, out);
    }

    pub(crate) fn decode(&self, target: &mut T, cursor: &mut XmlCursor<'_>) -> QueryResult<()> {
        self.access.decode(target, cursor)
    }

    pub(crate) fn start_list(&self, target: &mut T) {
        self.access.start_list(target);
    }

    pub(crate) fn decode_params(
        &self,
        target: &mut T,
        prefix: &str,
        params: &QueryParams,
    ) -> QueryResult<()> {
        let key = format!("{prefix}{}", self.name);
        self.access.decode_params(target, &key, params)
    }

    pub(crate) fn write_xml(&self, target: &T, writer: &mut XmlWriter<'_>) -> io::Result<()> {
        self.access.write_xml(target, &self.path, writer)
    }
}

impl<T: 'static> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// First field name that appears more than once in `T`'s table.
#[must_use]
pub fn duplicate_field_name<T: QueryShape>() -> Option<&'static str> {
    let fields = T::fields();
    fields.iter().enumerate().find_map(|(i, field)| {
        fields[..i]
            .iter()
            .any(|earlier| earlier.name == field.name)
            .then_some(field.name)
    })
}

// ---------------------------------------------------------------------------
// Type-erased member access
// ---------------------------------------------------------------------------

trait Access<T>: Send + Sync {
    fn is_present(&self, target: &T) -> bool;
    fn encode(&self, target: &T, key: &str, out: &mut QueryParams);
    fn decode(&self, target: &mut T, cursor: &mut XmlCursor<'_>) -> QueryResult<()>;
    fn start_list(&self, target: &mut T);
    fn decode_params(&self, target: &mut T, key: &str, params: &QueryParams) -> QueryResult<()>;
    fn write_xml(&self, target: &T, path: &str, writer: &mut XmlWriter<'_>) -> io::Result<()>;
}

/// Per-element conversions, one implementation for scalars and one for shapes.
trait ElementCodec<V>: 'static {
    fn encode(value: &V, key: &str, out: &mut QueryParams);
    fn decode(cursor: &mut XmlCursor<'_>) -> QueryResult<V>;
    fn decode_params(params: &QueryParams, key: &str) -> QueryResult<Option<V>>;
    fn write_xml(value: &V, tag: &str, writer: &mut XmlWriter<'_>) -> io::Result<()>;
}

struct ScalarCodec;

impl<V: ScalarValue> ElementCodec<V> for ScalarCodec {
    fn encode(value: &V, key: &str, out: &mut QueryParams) {
        out.push(key, value.to_wire());
    }

    fn decode(cursor: &mut XmlCursor<'_>) -> QueryResult<V> {
        V::from_wire(&cursor.read_text()?)
    }

    fn decode_params(params: &QueryParams, key: &str) -> QueryResult<Option<V>> {
        params.get(key).map(V::from_wire).transpose()
    }

    fn write_xml(value: &V, tag: &str, writer: &mut XmlWriter<'_>) -> io::Result<()> {
        writer
            .create_element(tag)
            .write_text_content(BytesText::new(&value.to_wire()))?;
        Ok(())
    }
}

struct ShapeCodec;

impl<V: QueryShape> ElementCodec<V> for ShapeCodec {
    fn encode(value: &V, key: &str, out: &mut QueryParams) {
        encode::encode_shape(value, &format!("{key}."), out);
    }

    fn decode(cursor: &mut XmlCursor<'_>) -> QueryResult<V> {
        decode::decode_shape(cursor)
    }

    fn decode_params(params: &QueryParams, key: &str) -> QueryResult<Option<V>> {
        let prefix = format!("{key}.");
        if !params.has_prefix(&prefix) {
            return Ok(None);
        }
        decode::decode_params(params, &prefix).map(Some)
    }

    fn write_xml(value: &V, tag: &str, writer: &mut XmlWriter<'_>) -> io::Result<()> {
        writer
            .create_element(tag)
            .write_inner_content(|w| write_fields(value, w))?;
        Ok(())
    }
}

struct ValueAccess<T, V, C> {
    get: fn(&T) -> &Option<V>,
    get_mut: fn(&mut T) -> &mut Option<V>,
    _codec: PhantomData<fn() -> C>,
}

impl<T, V, C> ValueAccess<T, V, C> {
    fn new(get: fn(&T) -> &Option<V>, get_mut: fn(&mut T) -> &mut Option<V>) -> Self {
        Self {
            get,
            get_mut,
            _codec: PhantomData,
        }
    }
}

impl<T, V, C> Access<T> for ValueAccess<T, V, C>
where
    T: 'static,
    V: 'static,
    C: ElementCodec<V>,
{
    fn is_present(&self, target: &T) -> bool {
        (self.get)(target).is_some()
    }

    fn encode(&self, target: &T, key: &str, out: &mut QueryParams) {
        if let Some(value) = (self.get)(target) {
            C::encode(value, key, out);
        }
    }

    fn decode(&self, target: &mut T, cursor: &mut XmlCursor<'_>) -> QueryResult<()> {
        *(self.get_mut)(target) = Some(C::decode(cursor)?);
        Ok(())
    }

    fn start_list(&self, _target: &mut T) {}

    fn decode_params(&self, target: &mut T, key: &str, params: &QueryParams) -> QueryResult<()> {
        if let Some(value) = C::decode_params(params, key)? {
            *(self.get_mut)(target) = Some(value);
        }
        Ok(())
    }

    fn write_xml(&self, target: &T, path: &str, writer: &mut XmlWriter<'_>) -> io::Result<()> {
        let Some(value) = (self.get)(target) else {
            return Ok(());
        };
        let (wrappers, tag) = split_path(path);
        write_wrapped(writer, &wrappers, |w| C::write_xml(value, tag, w))
    }
}

struct ListAccess<T, V, C> {
    style: ListStyle,
    get: fn(&T) -> &Option<Vec<V>>,
    get_mut: fn(&mut T) -> &mut Option<Vec<V>>,
    _codec: PhantomData<fn() -> C>,
}

impl<T, V, C> ListAccess<T, V, C> {
    fn new(
        style: ListStyle,
        get: fn(&T) -> &Option<Vec<V>>,
        get_mut: fn(&mut T) -> &mut Option<Vec<V>>,
    ) -> Self {
        Self {
            style,
            get,
            get_mut,
            _codec: PhantomData,
        }
    }
}

impl<T, V, C> Access<T> for ListAccess<T, V, C>
where
    T: 'static,
    V: 'static,
    C: ElementCodec<V>,
{
    fn is_present(&self, target: &T) -> bool {
        (self.get)(target).is_some()
    }

    fn encode(&self, target: &T, key: &str, out: &mut QueryParams) {
        let Some(items) = (self.get)(target) else {
            return;
        };
        for (i, item) in items.iter().enumerate() {
            C::encode(item, &self.style.element_key(key, i + 1), out);
        }
    }

    fn decode(&self, target: &mut T, cursor: &mut XmlCursor<'_>) -> QueryResult<()> {
        let item = C::decode(cursor)?;
        (self.get_mut)(target).get_or_insert_with(Vec::new).push(item);
        Ok(())
    }

    fn start_list(&self, target: &mut T) {
        (self.get_mut)(target).get_or_insert_with(Vec::new);
    }

    fn decode_params(&self, target: &mut T, key: &str, params: &QueryParams) -> QueryResult<()> {
        let mut items = Vec::new();
        for index in 1.. {
            match C::decode_params(params, &self.style.element_key(key, index))? {
                Some(item) => items.push(item),
                None => break,
            }
        }
        if !items.is_empty() {
            *(self.get_mut)(target) = Some(items);
        }
        Ok(())
    }

    fn write_xml(&self, target: &T, path: &str, writer: &mut XmlWriter<'_>) -> io::Result<()> {
        let Some(items) = (self.get)(target) else {
            return Ok(());
        };
        let (wrappers, tag) = split_path(path);
        write_wrapped(writer, &wrappers, |w| {
            for item in items {
                C::write_xml(item, tag, w)?;
            }
            Ok(())
        })
    }
}

/// Split `A/B/C` into the wrapper segments `[A, B]` and the leaf `C`.
fn split_path(path: &str) -> (Vec<&str>, &str) {
    match path.rsplit_once('/') {
        Some((wrappers, leaf)) => (wrappers.split('/').collect(), leaf),
        None => (Vec::new(), path),
    }
}

/// Declare the field table of a shape.
///
/// Each entry names the field kind (`scalar`, `structure`, `scalar_list`,
/// `structure_list`), the list style for lists, the wire name, an optional
/// XML path override after `@`, and the struct member.
///
/// ```
/// use rustack_query::{QueryShape, query_shape};
///
/// #[derive(Debug, Default)]
/// pub struct Tag {
///     pub key: Option<String>,
///     pub value: Option<String>,
/// }
///
/// #[derive(Debug, Default)]
/// pub struct CreateTagsInput {
///     pub resource_name: Option<String>,
///     pub tags: Option<Vec<Tag>>,
/// }
///
/// query_shape!(Tag {
///     scalar "Key" => key,
///     scalar "Value" => value,
/// });
///
/// query_shape!(CreateTagsInput {
///     scalar "ResourceName" => resource_name,
///     structure_list(Indexed) "Tags" @ "Tags/Tag" => tags,
/// });
///
/// assert_eq!(CreateTagsInput::fields().len(), 2);
/// ```
#[macro_export]
macro_rules! query_shape {
    ($shape:ident {
        $( $kind:ident $( ( $style:ident ) )? $name:literal $( @ $path:literal )? => $field:ident ),* $(,)?
    }) => {
        impl $crate::QueryShape for $shape {
            const SHAPE_NAME: &'static str = stringify!($shape);

            fn fields() -> &'static [$crate::Field<Self>] {
                static FIELDS: ::std::sync::LazyLock<::std::vec::Vec<$crate::Field<$shape>>> =
                    ::std::sync::LazyLock::new(|| {
                        ::std::vec![
                            $(
                                $crate::Field::<$shape>::$kind(
                                    $name,
                                    $( $crate::ListStyle::$style, )?
                                    |s: &$shape| &s.$field,
                                    |s: &mut $shape| &mut s.$field,
                                ) $( .at($path) )?
                            ),*
                        ]
                    });
                &FIELDS
            }
        }
    };
}
