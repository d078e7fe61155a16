//! Errors that can happen when decoding a [`Source`](crate::Source) into a record.
use smallvec::SmallVec;

/// The error returned by [`Decoder::decode`](crate::Decoder::decode) when decoding fails.
///
/// Decoding stops at the first failure.
/// [`DecodeError::kind`] tells you what went wrong, [`DecodeError::path`] tells you
/// which field it went wrong for.
///
/// The target may have been partially populated: every field that precedes the failing one,
/// in declaration order, holds its decoded value.
#[derive(Debug)]
pub struct DecodeError {
    path: SmallVec<[String; 4]>,
    kind: ErrorKind,
}

impl DecodeError {
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self {
            path: SmallVec::new(),
            kind,
        }
    }

    /// Prepend the effective name of the field that contains the failure.
    pub(crate) fn within(mut self, field: &str) -> Self {
        self.path.insert(0, field.to_owned());
        self
    }

    /// Retrieve the details of the failure.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Consume the error and return the details of the failure.
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// The effective names of the fields on the way from the decode target to the
    /// failing field, outermost first.
    ///
    /// The path includes inlined records, even though their names don't show up in
    /// the lookup key.
    /// It is empty when the failure isn't tied to a field (see [`ErrorKind::InvalidTarget`]).
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// `true` if the failure happened inside a nested record.
    pub fn is_nested(&self) -> bool {
        self.path.len() > 1
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            return std::fmt::Display::fmt(&self.kind, f);
        }
        write!(f, "Failed to decode `{}`: {}", self.path.join("."), self.kind)
    }
}

impl std::error::Error for DecodeError {}

/// The kinds of failures that can happen while decoding.
///
/// This type is obtained through [`DecodeError::kind`] and is useful for building
/// more precise error messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The decode target is not a record.
    #[error(
        "`{type_name}` can't be used as a decode target. \
        The target must be a record, i.e. a type that implements `urlp::Record`"
    )]
    InvalidTarget {
        /// The name of the type that was passed as target.
        type_name: &'static str,
    },
    /// A required field has no value.
    ///
    /// The key is either absent from the source or mapped to an empty list of values.
    #[error("`{key}` is missing and the field is not optional")]
    MissingValue {
        /// The key that was looked up.
        key: String,
    },
    /// A value was found, but it can't be coerced into the type of the field.
    #[error("`{key}` is set to `{value}`, which we can't parse as a `{expected_type}`")]
    ParseFailure {
        /// The key that was looked up. For sequences, it includes the index of the element.
        key: String,
        /// The raw value.
        value: String,
        /// The name of the type we tried to coerce the value into.
        expected_type: &'static str,
    },
    /// The type of the field is not one the decoder knows how to populate.
    ///
    /// This is a programmer error, it doesn't depend on the decoded values.
    #[error("`{type_name}` (used for `{key}`) is not a supported field type")]
    UnsupportedType {
        /// The key that was looked up.
        key: String,
        /// The name of the unsupported type.
        type_name: &'static str,
    },
}
