mod inject;
mod instantiate;
mod register;
mod resolve;

pub use inject::InjectErrorKind;
pub use instantiate::InstantiateErrorKind;
pub use register::RegisterErrorKind;
pub use resolve::ResolveErrorKind;
