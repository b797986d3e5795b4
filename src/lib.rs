#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub(crate) mod any;
pub(crate) mod config;
pub(crate) mod container;
pub(crate) mod entry;
pub(crate) mod errors;
pub(crate) mod inject;
pub(crate) mod instantiator;
pub(crate) mod name;
pub(crate) mod provider;
pub(crate) mod registry;

pub mod macros_utils;

#[cfg(feature = "std")]
pub mod global;

pub use any::{RcAny, TypeInfo};
pub use config::Config;
pub use container::Container;
pub use entry::{Kind, Raw};
pub use errors::{InjectErrorKind, InstantiateErrorKind, RegisterErrorKind, ResolveErrorKind};
pub use inject::{Dependency, FromService, Injectable};
pub use instantiator::{Instantiator, Producer};
pub use name::is_valid_name;
pub use provider::Provider;

#[cfg(feature = "std")]
pub use global::global;

#[cfg(feature = "macros")]
pub use dibox_macros::Injectable;
