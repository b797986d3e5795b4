use alloc::sync::Arc;

use crate::{
    any::{RcAny, TypeInfo},
    errors::InjectErrorKind,
};

/// A field of an [`Injectable`] type and the name of the service it's filled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    pub field: &'static str,
    pub service: &'static str,
}

impl Dependency {
    #[inline]
    #[must_use]
    pub const fn new(field: &'static str, service: &'static str) -> Self {
        Self { field, service }
    }

    /// Parses a dependency tag: the service name is its first comma-separated segment,
    /// everything after the first comma is reserved.
    ///
    /// Returns `None` if the service name is empty, so the field isn't a dependency.
    #[must_use]
    pub fn from_tag(field: &'static str, tag: &'static str) -> Option<Self> {
        let service = tag.split(',').next().unwrap_or_default().trim();
        if service.is_empty() {
            None
        } else {
            Some(Self { field, service })
        }
    }
}

/// A type whose fields can be filled from a container, see [`crate::Container::inject`].
///
/// Usually derived with `#[derive(Injectable)]` and `#[inject("service-name")]` on fields.
pub trait Injectable {
    /// Fields to fill, in order.
    fn dependencies() -> alloc::vec::Vec<Dependency>
    where
        Self: Sized;

    /// Stores a resolved service into the field the dependency names.
    ///
    /// # Errors
    /// - Returns [`InjectErrorKind::IncorrectType`] if the service doesn't fit the field
    /// - Returns [`InjectErrorKind::UnknownField`] if the field isn't injectable
    fn assign(&mut self, dependency: &Dependency, service: RcAny) -> Result<(), InjectErrorKind>;
}

/// Conversion of a resolved service into a field value.
pub trait FromService: Sized {
    fn type_info() -> TypeInfo;

    /// Returns `None` if the service has another type.
    fn from_service(service: RcAny) -> Option<Self>;
}

impl<T: Send + Sync + 'static> FromService for Arc<T> {
    #[inline]
    fn type_info() -> TypeInfo {
        TypeInfo::of::<T>()
    }

    #[inline]
    fn from_service(service: RcAny) -> Option<Self> {
        service.downcast().ok()
    }
}

impl<T: Send + Sync + 'static> FromService for Option<Arc<T>> {
    #[inline]
    fn type_info() -> TypeInfo {
        TypeInfo::of::<T>()
    }

    #[inline]
    fn from_service(service: RcAny) -> Option<Self> {
        service.downcast().ok().map(Some)
    }
}
