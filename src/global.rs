//! Process-wide container and free functions delegating to it.
//!
//! Everything here is a thin wrapper around [`global()`], so it follows the same rules as the
//! corresponding [`Container`] methods. Prefer passing an explicit [`Container`] where possible.

use alloc::{collections::BTreeMap, string::String, sync::Arc, vec::Vec};
use once_cell::sync::Lazy;

use crate::{
    any::RcAny,
    container::Container,
    errors::{InjectErrorKind, RegisterErrorKind, ResolveErrorKind},
    inject::Injectable,
    instantiator::Instantiator,
    provider::Provider,
};

static GLOBAL: Lazy<Container> = Lazy::new(|| Container::named("global"));

/// The process-wide container, created on first access.
#[inline]
#[must_use]
pub fn global() -> &'static Container {
    &GLOBAL
}

/// # Errors
/// See [`Container::get`].
#[inline]
pub fn get<Dep: Send + Sync + 'static>(name: &str) -> Result<Arc<Dep>, ResolveErrorKind> {
    GLOBAL.get(name)
}

/// # Errors
/// See [`Container::get_any`].
#[inline]
pub fn get_any(name: &str) -> Result<RcAny, ResolveErrorKind> {
    GLOBAL.get_any(name)
}

/// # Errors
/// See [`Container::try_register`].
#[inline]
pub fn try_register(name: &str, provider: Provider) -> Result<(), RegisterErrorKind> {
    GLOBAL.try_register(name, provider).map(|_| ())
}

/// # Panics
/// See [`Container::register`].
#[inline]
#[track_caller]
pub fn register(name: &str, provider: Provider) {
    GLOBAL.register(name, provider);
}

/// # Panics
/// See [`Container::add`].
#[inline]
#[track_caller]
pub fn add(name: &str, provider: Provider) {
    GLOBAL.add(name, provider);
}

/// # Panics
/// See [`Container::register`].
#[inline]
#[track_caller]
pub fn set<T: Send + Sync + 'static>(name: &str, value: T) {
    GLOBAL.set(name, value);
}

/// # Panics
/// See [`Container::register`].
#[inline]
#[track_caller]
pub fn set_singleton<Inst, Args>(name: &str, instantiator: Inst)
where
    Inst: Instantiator<Args>,
{
    GLOBAL.set_singleton(name, instantiator);
}

/// # Panics
/// See [`Container::register`].
#[inline]
#[track_caller]
pub fn set_factory<Inst, Args>(name: &str, instantiator: Inst)
where
    Inst: Instantiator<Args>,
{
    GLOBAL.set_factory(name, instantiator);
}

/// # Panics
/// See [`Container::set_alias`].
#[inline]
#[track_caller]
pub fn set_alias<I>(name: &str, aliases: I)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    GLOBAL.set_alias(name, aliases);
}

#[inline]
#[must_use]
pub fn has(name: &str) -> bool {
    GLOBAL.has(name)
}

#[inline]
pub fn del(name: &str) -> bool {
    GLOBAL.del(name)
}

#[inline]
pub fn clear() {
    GLOBAL.clear();
}

#[inline]
#[must_use]
pub fn names() -> Vec<String> {
    GLOBAL.names()
}

#[inline]
#[must_use]
pub fn aliases() -> BTreeMap<String, String> {
    GLOBAL.aliases()
}

/// # Errors
/// See [`Container::inject`].
#[inline]
pub fn inject<T: Injectable>(target: &mut T) -> Result<(), InjectErrorKind> {
    GLOBAL.inject(target)
}
