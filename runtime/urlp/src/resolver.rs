use std::borrow::Cow;

use urlp_annotation::Annotation;

use crate::config::DecoderConfig;
use crate::record::Field;

/// A field with its annotation and the decoder configuration folded in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedField {
    /// The name the field is looked up with, before prefixing.
    pub(crate) name: Cow<'static, str>,
    pub(crate) optional: bool,
    pub(crate) not_inlined: bool,
    pub(crate) ignored: bool,
}

impl ResolvedField {
    pub(crate) fn resolve<R>(field: &Field<R>, config: &DecoderConfig) -> Self {
        let mut name = if config.lower_case_names {
            Cow::Owned(field.name().to_lowercase())
        } else {
            Cow::Borrowed(field.name())
        };
        let mut optional = config.all_optional;
        let mut not_inlined = config.all_not_inlined;
        let mut marked = false;

        if let Some(raw) = field.annotation(&config.tag) {
            let annotation = Annotation::parse(raw);
            if let Some(n) = annotation.name {
                name = Cow::Borrowed(n);
            }
            optional |= annotation.optional;
            not_inlined |= annotation.not_inlined;
            marked = annotation.marked;
        }

        Self {
            name,
            optional,
            not_inlined,
            ignored: marked != config.invert_ignore_mark,
        }
    }
}
