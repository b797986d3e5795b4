//! Helpers used by code generated with `#[derive(Injectable)]`. Not a stable API.

use tracing::error;

pub mod aliases {
    pub use alloc::vec::Vec;
}

use crate::{
    any::RcAny,
    errors::InjectErrorKind,
    inject::{Dependency, FromService},
};

/// Converts the service into the field type and stores it in the field.
///
/// # Errors
/// Returns [`InjectErrorKind::IncorrectType`] if the service has another type than the field expects.
#[inline]
pub fn assign<F: FromService>(slot: &mut F, dependency: &Dependency, service: RcAny) -> Result<(), InjectErrorKind> {
    match F::from_service(service) {
        Some(value) => {
            *slot = value;
            Ok(())
        }
        None => {
            let err = InjectErrorKind::IncorrectType {
                field: dependency.field,
                service: dependency.service,
                expected: F::type_info(),
            };
            error!("{}", err);
            Err(err)
        }
    }
}
