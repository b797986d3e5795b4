use super::resolve::ResolveErrorKind;
use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug)]
pub enum InjectErrorKind {
    #[error("Dependency `{service}` of field `{field}` not found")]
    DependencyNotFound { field: &'static str, service: &'static str },
    #[error("Field `{field}` expects {expected}, but service `{service}` provides another type")]
    IncorrectType {
        field: &'static str,
        service: &'static str,
        expected: TypeInfo,
    },
    #[error("Field `{field}` isn't injectable")]
    UnknownField { field: &'static str },
    #[error("Failed to resolve dependency of field `{field}`: {source}")]
    Resolve {
        field: &'static str,
        #[source]
        source: ResolveErrorKind,
    },
}
