use alloc::string::String;

use super::instantiate::InstantiateErrorKind;
use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug)]
pub enum ResolveErrorKind {
    #[error("Service `{name}` not found")]
    NotFound { name: String },
    #[error("Incorrect type of service `{name}`. Actual: {actual}, expected: {expected}")]
    IncorrectType {
        name: String,
        expected: TypeInfo,
        actual: TypeInfo,
    },
    #[error(transparent)]
    Instantiate(InstantiateErrorKind),
}
