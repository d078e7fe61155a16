//! The annotation grammar attached to the fields of a `urlp` record.
//!
//! An annotation is a comma-separated list of tokens:
//!
//! - `optional` marks the field as optional;
//! - `notinlined` makes a nested record read its keys under `<name>.`;
//! - `!` is the ignore mark;
//! - any other token overrides the name used to look the field up.
//!
//! There is no escaping: a name containing a `,` can't be expressed, and a name
//! equal to one of the keywords is always read as the keyword.
//!
//! [`Annotation::parse`] is lenient and never fails, it's what the decoder uses at runtime.
//! [`Annotation::validate`] rejects the ambiguous inputs that [`Annotation::parse`] silently
//! accepts; `#[derive(Record)]` uses it to surface mistakes at compile time.
pub mod errors;

use errors::InvalidAnnotation;

/// The tag identifier annotations are attached to when none is specified.
pub const DEFAULT_TAG: &str = "urlp";

/// The token that marks a field as optional.
pub const OPTIONAL: &str = "optional";
/// The token that stops a nested record from being inlined into its parent.
pub const NOT_INLINED: &str = "notinlined";
/// The ignore mark.
pub const IGNORE_MARK: &str = "!";

/// The modifiers extracted from a single annotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Annotation<'a> {
    /// The name override, if the annotation carries one.
    pub name: Option<&'a str>,
    /// `optional` was present.
    pub optional: bool,
    /// `notinlined` was present.
    pub not_inlined: bool,
    /// `!` was present.
    pub marked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Optional,
    NotInlined,
    IgnoreMark,
    Name(&'a str),
}

impl<'a> Token<'a> {
    fn classify(token: &'a str) -> Self {
        match token {
            OPTIONAL => Token::Optional,
            NOT_INLINED => Token::NotInlined,
            IGNORE_MARK => Token::IgnoreMark,
            name => Token::Name(name),
        }
    }
}

impl<'a> Annotation<'a> {
    /// Parse an annotation.
    ///
    /// Every token that isn't a keyword is a name override; if there are several,
    /// the last one wins.
    pub fn parse(raw: &'a str) -> Self {
        let mut annotation = Self::default();
        for token in raw.split(',') {
            annotation.apply(Token::classify(token));
        }
        annotation
    }

    /// Parse an annotation, rejecting empty tokens, tokens with surrounding
    /// whitespace and multiple name overrides.
    pub fn validate(raw: &'a str) -> Result<Self, InvalidAnnotation> {
        let mut annotation = Self::default();
        for token in raw.split(',') {
            if token.is_empty() {
                return Err(InvalidAnnotation::EmptyToken {
                    annotation: raw.to_owned(),
                });
            }
            if token.trim() != token {
                return Err(InvalidAnnotation::PaddedToken {
                    annotation: raw.to_owned(),
                    token: token.to_owned(),
                });
            }
            let token = Token::classify(token);
            if let (Token::Name(second), Some(first)) = (token, annotation.name) {
                return Err(InvalidAnnotation::MultipleNames {
                    annotation: raw.to_owned(),
                    first: first.to_owned(),
                    second: second.to_owned(),
                });
            }
            annotation.apply(token);
        }
        Ok(annotation)
    }

    fn apply(&mut self, token: Token<'a>) {
        match token {
            Token::Optional => self.optional = true,
            Token::NotInlined => self.not_inlined = true,
            Token::IgnoreMark => self.marked = true,
            Token::Name(name) => self.name = Some(name),
        }
    }
}
