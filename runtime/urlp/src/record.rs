//! The static shape of a record and the typed views the decoder writes through.
use crate::coerce;
use crate::decoder::Descent;
use crate::errors::{DecodeError, ErrorKind};

/// A type whose fields can be populated from a [`Source`](crate::Source).
///
/// You'll usually rely on `#[derive(Record)]` to implement this trait, but the descriptor
/// table can also be written by hand.
/// Implement [`Decodable`] as well, returning [`Target::Record`], to use the record
/// as a decode target or as a nested field:
///
/// ```rust
/// use urlp::{Decodable, Field, Record, Target, Values};
///
/// #[derive(Default)]
/// pub struct Page {
///     pub number: u32,
///     pub size: u32,
/// }
///
/// fn number(page: &mut Page) -> Target<'_> {
///     page.number.target()
/// }
///
/// fn size(page: &mut Page) -> Target<'_> {
///     page.size.target()
/// }
///
/// impl Record for Page {
///     const FIELDS: &'static [Field<Self>] = &[
///         Field::new("number", number),
///         Field::new("size", size).with_annotations(&[("urlp", "optional")]),
///     ];
/// }
///
/// impl Decodable for Page {
///     fn target(&mut self) -> Target<'_> {
///         Target::Record(self)
///     }
/// }
///
/// let mut page = Page::default();
/// urlp::decode(&Values::parse("number=3"), &mut page).unwrap();
/// assert_eq!(page.number, 3);
/// assert_eq!(page.size, 0);
/// ```
pub trait Record: Sized + 'static {
    /// The fields of the record, in declaration order.
    const FIELDS: &'static [Field<Self>];
}

/// Returns a typed, mutable view over one of the fields of `R`.
pub type Accessor<R> = for<'a> fn(&'a mut R) -> Target<'a>;

/// The descriptor of a single field of a [`Record`].
pub struct Field<R> {
    name: &'static str,
    annotations: &'static [(&'static str, &'static str)],
    settable: bool,
    access: Accessor<R>,
}

impl<R> Field<R> {
    /// A settable field with no annotations.
    pub const fn new(name: &'static str, access: Accessor<R>) -> Self {
        Self {
            name,
            annotations: &[],
            settable: true,
            access,
        }
    }

    /// Attach annotations to the field, one per tag identifier.
    ///
    /// Each pair is `(tag, annotation)`, e.g. `("urlp", "g,optional")`.
    pub const fn with_annotations(
        self,
        annotations: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            name: self.name,
            annotations,
            settable: self.settable,
            access: self.access,
        }
    }

    /// Mark whether the decoder is allowed to write into this field.
    ///
    /// Fields that are not settable are always skipped.
    pub const fn settable(self, settable: bool) -> Self {
        Self {
            name: self.name,
            annotations: self.annotations,
            settable,
            access: self.access,
        }
    }

    /// The name of the field, as declared.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The annotation attached to the field under `tag`, if any.
    pub fn annotation(&self, tag: &str) -> Option<&'static str> {
        self.annotations
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, annotation)| *annotation)
    }

    pub fn is_settable(&self) -> bool {
        self.settable
    }

    pub(crate) fn access<'a>(&self, record: &'a mut R) -> Target<'a> {
        (self.access)(record)
    }
}

impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Field<R> {}

impl<R> std::fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("annotations", &self.annotations)
            .field("settable", &self.settable)
            .finish_non_exhaustive()
    }
}

/// A mutable view over a field, classified by what the decoder can do with it.
pub enum Target<'a> {
    /// A single string, boolean or number.
    Scalar(ScalarMut<'a>),
    /// A sequence of scalars, populated from every value stored under the key.
    Sequence(&'a mut dyn Sequence),
    /// A nested record.
    Record(&'a mut dyn DynRecord),
    /// A type the decoder doesn't know how to populate.
    Unsupported(&'static str),
}

/// Types that can appear as the type of a field in a [`Record`].
pub trait Decodable {
    fn target(&mut self) -> Target<'_>;
}

/// A mutable reference to one of the scalar types supported by the decoder.
#[derive(Debug)]
pub enum ScalarMut<'a> {
    String(&'a mut String),
    Bool(&'a mut bool),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    I128(&'a mut i128),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    U128(&'a mut u128),
    Usize(&'a mut usize),
    F32(&'a mut f32),
    F64(&'a mut f64),
}

impl ScalarMut<'_> {
    /// The name of the underlying Rust type.
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarMut::String(_) => "String",
            ScalarMut::Bool(_) => "bool",
            ScalarMut::I8(_) => "i8",
            ScalarMut::I16(_) => "i16",
            ScalarMut::I32(_) => "i32",
            ScalarMut::I64(_) => "i64",
            ScalarMut::I128(_) => "i128",
            ScalarMut::Isize(_) => "isize",
            ScalarMut::U8(_) => "u8",
            ScalarMut::U16(_) => "u16",
            ScalarMut::U32(_) => "u32",
            ScalarMut::U64(_) => "u64",
            ScalarMut::U128(_) => "u128",
            ScalarMut::Usize(_) => "usize",
            ScalarMut::F32(_) => "f32",
            ScalarMut::F64(_) => "f64",
        }
    }
}

/// A type that can be coerced from a single string.
pub trait Scalar: Default {
    fn scalar_mut(&mut self) -> ScalarMut<'_>;
}

macro_rules! scalars {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                fn scalar_mut(&mut self) -> ScalarMut<'_> {
                    ScalarMut::$variant(self)
                }
            }

            impl Decodable for $ty {
                fn target(&mut self) -> Target<'_> {
                    Target::Scalar(ScalarMut::$variant(self))
                }
            }
        )*
    };
}

scalars! {
    String => String,
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}

/// A sequence of scalars.
pub trait Sequence {
    /// Replace the content of the sequence with one element per raw value.
    ///
    /// The sequence is left untouched if any of the values can't be coerced.
    fn assign(&mut self, key: &str, raw: &[String]) -> Result<(), ErrorKind>;
}

impl<T: Scalar> Sequence for Vec<T> {
    fn assign(&mut self, key: &str, raw: &[String]) -> Result<(), ErrorKind> {
        let mut decoded = Vec::with_capacity(raw.len());
        for (i, value) in raw.iter().enumerate() {
            let mut element = T::default();
            coerce::scalar(element.scalar_mut(), value, false)
                .map_err(|e| e.at(format!("{key}[{i}]")))?;
            decoded.push(element);
        }
        *self = decoded;
        Ok(())
    }
}

impl<T: Scalar> Decodable for Vec<T> {
    fn target(&mut self) -> Target<'_> {
        Target::Sequence(self)
    }
}

impl Decodable for char {
    fn target(&mut self) -> Target<'_> {
        Target::Unsupported("char")
    }
}

impl<T: ?Sized> Decodable for Box<T> {
    fn target(&mut self) -> Target<'_> {
        Target::Unsupported(std::any::type_name::<Self>())
    }
}

impl<T> Decodable for Option<T> {
    fn target(&mut self) -> Target<'_> {
        Target::Unsupported(std::any::type_name::<Self>())
    }
}

/// The object-safe face of a [`Record`], used to recurse into nested records.
pub trait DynRecord {
    /// The name of the concrete record type.
    fn type_name(&self) -> &'static str;

    #[doc(hidden)]
    fn walk(&mut self, descent: &mut Descent<'_>) -> Result<(), DecodeError>;
}

impl<R: Record> DynRecord for R {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<R>()
    }

    fn walk(&mut self, descent: &mut Descent<'_>) -> Result<(), DecodeError> {
        descent.record(self)
    }
}
