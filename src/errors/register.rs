use alloc::string::String;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterErrorKind {
    #[error("Invalid service name `{name}`: it must start with a letter and contain only letters, digits, `_`, `-` and `.`")]
    InvalidName { name: String },
    #[error("Service `{name}` has already been resolved and can't be overridden")]
    AlreadyInUse { name: String },
}
