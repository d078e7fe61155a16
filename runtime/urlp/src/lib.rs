//! # urlp
//!
//! Decode the flat, multi-valued mappings you get out of a query string or an HTML form
//! into statically-typed, possibly nested, records.
//!
//! ```rust
//! use urlp::{Record, Values};
//!
//! #[derive(Record, Default, Debug)]
//! pub struct Inner {
//!     pub b: u32,
//!     pub c: bool,
//! }
//!
//! #[derive(Record, Default, Debug)]
//! pub struct Query {
//!     pub a: i64,
//!     #[urlp("inner,notinlined")]
//!     pub nested: Inner,
//!     #[urlp("ids")]
//!     pub identifiers: Vec<u16>,
//!     #[urlp("optional")]
//!     pub comment: String,
//! }
//!
//! let values = Values::parse("a=-3&inner.b=10&inner.c=true&ids=1&ids=2");
//! let mut query = Query::default();
//! urlp::decode(&values, &mut query).unwrap();
//!
//! assert_eq!(query.a, -3);
//! assert_eq!(query.nested.b, 10);
//! assert!(query.nested.c);
//! assert_eq!(query.identifiers, [1, 2]);
//! assert_eq!(query.comment, "");
//! ```
//!
//! # Annotations
//!
//! Each field can carry an annotation, a comma-separated list of tokens:
//!
//! - `optional`: a missing key (or an empty value, for non-string scalars) leaves
//!   the field untouched instead of failing the decode;
//! - `notinlined`: a nested record reads its keys under `<name>.` instead of
//!   sharing the keyspace of its parent;
//! - `!`: the field is ignored (see [`DecoderConfig::invert_ignore_mark`]);
//! - anything else overrides the name the field is looked up with.
//!
//! `#[urlp("...")]` attaches an annotation to the default `urlp` tag,
//! `#[urlp(form = "...")]` to the `form` tag. A [`Decoder`] only reads the annotations
//! stored under its own tag (see [`Decoder::with_tag`]).
//!
//! Only fields with an explicit visibility (`pub`, `pub(crate)`, ...) are populated,
//! private fields are always skipped.
//!
//! # Supported field types
//!
//! `String`, `bool`, every integer type, `f32`, `f64`, `Vec`s of those, and
//! other records. Any other type that implements [`Decodable`] by returning
//! [`Target::Unsupported`] (e.g. `char` or `Option<T>`) fails with
//! [`ErrorKind::UnsupportedType`] whenever a value is provided for it.
extern crate self as urlp;

mod coerce;
mod config;
mod decoder;
pub mod errors;
mod record;
mod resolver;
mod source;

pub use config::{DecoderConfig, DecoderOption};
#[doc(hidden)]
pub use decoder::Descent;
pub use decoder::{Decoder, decode};
pub use errors::{DecodeError, ErrorKind};
pub use record::{
    Accessor, Decodable, DynRecord, Field, Record, Scalar, ScalarMut, Sequence, Target,
};
pub use source::{Source, Values};
pub use urlp_macros::Record;
