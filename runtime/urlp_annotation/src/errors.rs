/// Failure modes of [`Annotation::validate`](crate::Annotation::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAnnotation {
    #[error("`{annotation}` contains an empty token")]
    EmptyToken { annotation: String },
    #[error("The token `{token}` in `{annotation}` has leading or trailing whitespace")]
    PaddedToken { annotation: String, token: String },
    #[error(
        "`{annotation}` overrides the field name more than once (`{first}` and `{second}`). \
        Use a single name override"
    )]
    MultipleNames {
        annotation: String,
        first: String,
        second: String,
    },
}
