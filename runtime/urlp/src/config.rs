use std::borrow::Cow;

/// Decoder-wide switches, applied uniformly to every field of every record
/// processed by a [`Decoder`](crate::Decoder).
///
/// [`DecoderConfig`] implements [`serde::Deserialize`], so it can be embedded
/// in your application configuration. Missing entries take their default value:
///
/// ```rust
/// use urlp::DecoderConfig;
///
/// let config: DecoderConfig = serde_json::from_str(r#"{ "lower_case_names": true }"#).unwrap();
/// assert!(config.lower_case_names);
/// assert!(!config.all_optional);
/// assert_eq!(config.tag, "urlp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DecoderConfig {
    /// Lower-case the declared field name before looking it up.
    ///
    /// A name override in the field annotation is used verbatim.
    pub lower_case_names: bool,
    /// Treat every field as optional.
    pub all_optional: bool,
    /// Treat every nested record as not inlined, i.e. its keys are prefixed with
    /// `<field name>.`.
    pub all_not_inlined: bool,
    /// Flip the meaning of the `!` mark: fields are ignored unless marked.
    pub invert_ignore_mark: bool,
    /// The tag identifier the decoder reads field annotations from.
    pub tag: Cow<'static, str>,
}

impl DecoderConfig {
    /// The tag identifier used when none is specified.
    pub const DEFAULT_TAG: &'static str = urlp_annotation::DEFAULT_TAG;

    /// No switches set, annotations read from [`DecoderConfig::DEFAULT_TAG`].
    pub const DEFAULT: Self = Self {
        lower_case_names: false,
        all_optional: false,
        all_not_inlined: false,
        invert_ignore_mark: false,
        tag: Cow::Borrowed(Self::DEFAULT_TAG),
    };

    /// Turn on a switch.
    pub fn enable(&mut self, option: DecoderOption) {
        match option {
            DecoderOption::LowerCaseNames => self.lower_case_names = true,
            DecoderOption::AllOptional => self.all_optional = true,
            DecoderOption::AllNotInlined => self.all_not_inlined = true,
            DecoderOption::InvertIgnoreMark => self.invert_ignore_mark = true,
        }
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromIterator<DecoderOption> for DecoderConfig {
    fn from_iter<I: IntoIterator<Item = DecoderOption>>(options: I) -> Self {
        let mut config = Self::DEFAULT;
        for option in options {
            config.enable(option);
        }
        config
    }
}

/// The switches that can be turned on in a [`DecoderConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecoderOption {
    /// See [`DecoderConfig::lower_case_names`].
    LowerCaseNames,
    /// See [`DecoderConfig::all_optional`].
    AllOptional,
    /// See [`DecoderConfig::all_not_inlined`].
    AllNotInlined,
    /// See [`DecoderConfig::invert_ignore_mark`].
    InvertIgnoreMark,
}
