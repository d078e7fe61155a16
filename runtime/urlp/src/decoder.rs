use std::any::type_name;
use std::borrow::Cow;

use crate::coerce;
use crate::config::{DecoderConfig, DecoderOption};
use crate::errors::{DecodeError, ErrorKind};
use crate::record::{Decodable, Record, Target};
use crate::resolver::ResolvedField;
use crate::source::Source;

/// Decode a [`Source`] into a record using the default configuration.
///
/// It's a shorthand for `Decoder::DEFAULT.decode(source, target)`.
/// Check out [`Decoder::decode`] for more details.
pub fn decode<S, T>(source: &S, target: &mut T) -> Result<(), DecodeError>
where
    S: Source,
    T: Decodable + ?Sized,
{
    Decoder::DEFAULT.decode(source, target)
}

/// A reusable, immutable decoder.
///
/// A [`Decoder`] can be shared across threads and used for any number of
/// concurrent decodes.
///
/// # Example
///
/// ```rust
/// use urlp::{Decoder, DecoderOption, Record, Values};
///
/// #[derive(Record, Default)]
/// pub struct Search {
///     pub query: String,
///     pub page: u32,
/// }
///
/// let decoder = Decoder::configure([DecoderOption::LowerCaseNames, DecoderOption::AllOptional]);
/// let search: Search = decoder.decode_default(&Values::parse("query=rust")).unwrap();
/// assert_eq!(search.query, "rust");
/// assert_eq!(search.page, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// A decoder with no switches set, reading annotations from the `urlp` tag.
    pub const DEFAULT: Decoder = Decoder {
        config: DecoderConfig::DEFAULT,
    };

    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Build a decoder with the given switches turned on.
    pub fn configure<I>(options: I) -> Self
    where
        I: IntoIterator<Item = DecoderOption>,
    {
        Self::new(options.into_iter().collect())
    }

    /// See [`DecoderConfig::lower_case_names`].
    pub fn lower_case_names(mut self, enabled: bool) -> Self {
        self.config.lower_case_names = enabled;
        self
    }

    /// See [`DecoderConfig::all_optional`].
    pub fn all_optional(mut self, enabled: bool) -> Self {
        self.config.all_optional = enabled;
        self
    }

    /// See [`DecoderConfig::all_not_inlined`].
    pub fn all_not_inlined(mut self, enabled: bool) -> Self {
        self.config.all_not_inlined = enabled;
        self
    }

    /// See [`DecoderConfig::invert_ignore_mark`].
    pub fn invert_ignore_mark(mut self, enabled: bool) -> Self {
        self.config.invert_ignore_mark = enabled;
        self
    }

    /// Read field annotations from `tag` rather than from the default `urlp` tag.
    pub fn with_tag(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.config.tag = tag.into();
        self
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode `source` into `target`.
    ///
    /// Fields are processed in declaration order, depth-first.
    /// Decoding stops at the first failure: fields declared before the failing one
    /// keep their decoded values, the following ones are left untouched.
    ///
    /// `target` must be a record, otherwise an [`ErrorKind::InvalidTarget`] error is returned.
    #[tracing::instrument(
        name = "Decode record",
        level = "trace",
        skip_all,
        fields(record = type_name::<T>())
    )]
    pub fn decode<S, T>(&self, source: &S, target: &mut T) -> Result<(), DecodeError>
    where
        S: Source,
        T: Decodable + ?Sized,
    {
        let Target::Record(record) = target.target() else {
            return Err(DecodeError::new(ErrorKind::InvalidTarget {
                type_name: type_name::<T>(),
            }));
        };
        let mut descent = Descent {
            source,
            config: &self.config,
            prefix: String::new(),
        };
        record.walk(&mut descent).inspect_err(|e| {
            tracing::debug!(error.msg = %e, error.details = ?e, "Failed to decode record");
        })
    }

    /// Decode `source` into a freshly defaulted `T`.
    pub fn decode_default<T, S>(&self, source: &S) -> Result<T, DecodeError>
    where
        T: Record + Decodable + Default,
        S: Source,
    {
        let mut target = T::default();
        self.decode(source, &mut target)?;
        Ok(target)
    }
}

/// The state of a single, in-progress decode.
#[doc(hidden)]
pub struct Descent<'d> {
    source: &'d dyn Source,
    config: &'d DecoderConfig,
    /// `<name>.` for every not-inlined record between the target and the current one.
    prefix: String,
}

impl Descent<'_> {
    pub(crate) fn record<R: Record>(&mut self, record: &mut R) -> Result<(), DecodeError> {
        for field in R::FIELDS {
            if !field.is_settable() {
                tracing::trace!(field.name = field.name(), "Skipping field that is not settable");
                continue;
            }
            let resolved = ResolvedField::resolve(field, self.config);
            if resolved.ignored {
                tracing::trace!(field.name = field.name(), "Skipping ignored field");
                continue;
            }
            self.field(&resolved, field.access(record))
                .map_err(|e| e.within(&resolved.name))?;
        }
        Ok(())
    }

    fn field(&mut self, field: &ResolvedField, target: Target<'_>) -> Result<(), DecodeError> {
        let restore = self.prefix.len();
        let outcome = match target {
            Target::Record(nested) if !field.not_inlined => nested.walk(self),
            Target::Record(nested) => {
                self.prefix.push_str(&field.name);
                self.prefix.push('.');
                nested.walk(self)
            }
            leaf => {
                self.prefix.push_str(&field.name);
                coerce::leaf(self.source, &self.prefix, field.optional, leaf)
                    .map_err(DecodeError::new)
            }
        };
        self.prefix.truncate(restore);
        outcome
    }
}
