use alloc::boxed::Box;

use super::resolve::ResolveErrorKind;

/// Error returned by a producer.
///
/// Any [`anyhow::Error`] converts into it, so producers can use `?` on their own errors.
/// Failures to resolve other services from inside a producer convert as well.
#[derive(thiserror::Error, Debug)]
pub enum InstantiateErrorKind {
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
    #[error(transparent)]
    Resolve(Box<ResolveErrorKind>),
}

impl From<ResolveErrorKind> for InstantiateErrorKind {
    #[inline]
    fn from(err: ResolveErrorKind) -> Self {
        Self::Resolve(Box::new(err))
    }
}
