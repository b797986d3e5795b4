use alloc::{
    borrow::Cow,
    collections::BTreeMap,
    string::{String, ToString as _},
    sync::Arc,
    vec::Vec,
};
use core::{
    any::type_name,
    fmt::{self, Debug, Formatter},
};
use parking_lot::RwLock;
use tracing::{debug, error, info_span, warn};

use crate::{
    any::{RcAny, TypeInfo},
    config::Config,
    entry::{Entry, Kind, Raw},
    errors::{InjectErrorKind, RegisterErrorKind, ResolveErrorKind},
    inject::Injectable,
    instantiator::{Instantiator, Producer},
    name,
    provider::Provider,
    registry::Registry,
};

/// Named service container.
///
/// Cloning is cheap: clones share the same registrations, aliases and cached instances.
#[derive(Clone)]
pub struct Container {
    pub(crate) inner: Arc<ContainerInner>,
}

pub(crate) struct ContainerInner {
    name: Cow<'static, str>,
    registry: RwLock<Registry>,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::named("anonymous")
    }

    /// Creates a container with a name, which is attached to its tracing spans.
    #[inline]
    #[must_use]
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner: Arc::new(ContainerInner {
                name: name.into(),
                registry: RwLock::new(Registry::new()),
            }),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }
}

impl Container {
    /// Registers a provider under a name.
    ///
    /// Registering a name that has not been resolved yet replaces its previous provider.
    ///
    /// # Errors
    /// - Returns [`RegisterErrorKind::InvalidName`] if the name doesn't match `[A-Za-z][\w\-.]*`
    /// - Returns [`RegisterErrorKind::AlreadyInUse`] if the name has already been resolved
    pub fn try_register(&self, name: &str, provider: Provider) -> Result<&Self, RegisterErrorKind> {
        let name = name::validate(name)?;
        let kind = provider.kind();
        let provides = provider.provides();

        let replaced = self.inner.registry.write().insert(name, Entry::from(provider))?;

        debug!(
            service = name,
            ?kind,
            provides = provides.name,
            replaced = replaced.is_some(),
            container = %self.inner.name,
            "Registered"
        );
        Ok(self)
    }

    /// Registers a provider under a name.
    ///
    /// # Panics
    /// Panics if the name is invalid or has already been resolved, see [`Self::try_register`].
    /// Both are wiring bugs rather than runtime conditions.
    #[track_caller]
    pub fn register(&self, name: &str, provider: Provider) -> &Self {
        match self.try_register(name, provider) {
            Ok(container) => container,
            Err(err) => {
                error!("{}", err);
                panic!("{}", err);
            }
        }
    }

    /// Registers a provider unless the name (or an alias with this name) is already registered.
    ///
    /// # Panics
    /// Panics if the name is invalid.
    #[track_caller]
    pub fn add(&self, name: &str, provider: Provider) -> &Self {
        let name = match name::validate(name) {
            Ok(name) => name,
            Err(err) => {
                error!("{}", err);
                panic!("{}", err);
            }
        };

        let mut registry = self.inner.registry.write();
        if registry.contains(name) {
            debug!(service = name, container = %self.inner.name, "Already registered, skipped");
            return self;
        }
        // Absent names can't be in use
        if let Err(err) = registry.insert(name, Entry::from(provider)) {
            drop(registry);
            error!("{}", err);
            panic!("{}", err);
        }

        debug!(service = name, container = %self.inner.name, "Registered");
        self
    }

    /// Registers a ready value.
    ///
    /// # Panics
    /// See [`Self::register`].
    #[inline]
    #[track_caller]
    pub fn set<T: Send + Sync + 'static>(&self, name: &str, value: T) -> &Self {
        self.register(name, Provider::value(value))
    }

    /// Registers a lazy singleton, produced on first resolution and shared afterwards.
    ///
    /// # Panics
    /// See [`Self::register`].
    #[inline]
    #[track_caller]
    pub fn set_singleton<Inst, Args>(&self, name: &str, instantiator: Inst) -> &Self
    where
        Inst: Instantiator<Args>,
    {
        self.register(name, Provider::singleton(instantiator))
    }

    /// Registers a factory, invoked on every resolution.
    ///
    /// # Panics
    /// See [`Self::register`].
    #[inline]
    #[track_caller]
    pub fn set_factory<Inst, Args>(&self, name: &str, instantiator: Inst) -> &Self
    where
        Inst: Instantiator<Args>,
    {
        self.register(name, Provider::factory(instantiator))
    }

    /// # Panics
    /// See [`Self::register`].
    #[inline]
    #[track_caller]
    pub fn set_with_config<Inst, Args>(&self, name: &str, instantiator: Inst, config: Config) -> &Self
    where
        Inst: Instantiator<Args>,
    {
        self.register(name, Provider::with_config(instantiator, config))
    }

    /// Points each alias at `name`.
    ///
    /// Does nothing if `name` isn't registered under its own name, so a service must be registered
    /// before it can be aliased, and aliases of aliases are ignored.
    /// Aliases that are registered names themselves are skipped.
    /// An alias already pointing at another service is moved to `name`.
    ///
    /// # Panics
    /// Panics if `name` is registered and one of the aliases is an invalid name.
    #[track_caller]
    pub fn set_alias<I>(&self, name: &str, aliases: I) -> &Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let name = name.trim();
        let mut registry = self.inner.registry.write();
        if registry.canonical(name) != name || !registry.contains(name) {
            debug!(service = name, container = %self.inner.name, "Alias target not registered, skipped");
            return self;
        }

        for alias in aliases {
            let alias = match name::validate(alias.as_ref()) {
                Ok(alias) => alias,
                Err(err) => {
                    drop(registry);
                    error!("{}", err);
                    panic!("{}", err);
                }
            };
            let previous = registry.alias_target(alias).filter(|target| *target != name).map(|target| target.to_string());
            if registry.insert_alias(name, alias) {
                match previous {
                    Some(previous) => warn!(
                        service = name,
                        alias,
                        previous = %previous,
                        container = %self.inner.name,
                        "Alias moved from another service"
                    ),
                    None => debug!(service = name, alias, container = %self.inner.name, "Alias added"),
                }
            } else {
                warn!(service = name, alias, container = %self.inner.name, "Alias is a registered name, skipped");
            }
        }
        self
    }
}

impl Container {
    /// Resolves a service by name or alias.
    ///
    /// The entry is marked as used before its payload resolves, even if the producer fails,
    /// so it can't be overridden afterwards.
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::NotFound`] if neither a name nor an alias matches
    /// - Returns [`ResolveErrorKind::Instantiate`] with the producer's error if it fails
    pub fn get_any(&self, name: &str) -> Result<RcAny, ResolveErrorKind> {
        let span = info_span!("get", service = name, container = %self.inner.name);
        let _guard = span.enter();

        let entry = self.entry_for_resolve(name)?;
        self.resolve_entry(&entry)
    }

    /// Resolves a service by name or alias and downcasts it.
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::IncorrectType`] if the service isn't a `Dep`.
    ///   The producer isn't invoked in this case.
    /// - See [`Self::get_any`] for the rest
    pub fn get<Dep: Send + Sync + 'static>(&self, name: &str) -> Result<Arc<Dep>, ResolveErrorKind> {
        let span = info_span!("get", service = name, dependency = type_name::<Dep>(), container = %self.inner.name);
        let _guard = span.enter();

        let entry = self.entry_for_resolve(name)?;

        let expected = TypeInfo::of::<Dep>();
        let actual = entry.type_info();
        if expected != actual {
            let err = ResolveErrorKind::IncorrectType {
                name: name.to_string(),
                expected,
                actual,
            };
            error!("{}", err);
            return Err(err);
        }

        self.resolve_entry(&entry)?.downcast::<Dep>().map_err(|_| {
            let err = ResolveErrorKind::IncorrectType {
                name: name.to_string(),
                expected,
                actual,
            };
            error!("{}", err);
            err
        })
    }

    /// Fills the dependencies of `target` declared by its [`Injectable`] implementation.
    ///
    /// # Errors
    /// - Returns [`InjectErrorKind::DependencyNotFound`] if a service isn't registered
    /// - Returns [`InjectErrorKind::IncorrectType`] if a service has another type than its field
    /// - Returns [`InjectErrorKind::Resolve`] if a service fails to resolve
    pub fn inject<T: Injectable>(&self, target: &mut T) -> Result<(), InjectErrorKind> {
        let span = info_span!("inject", target = type_name::<T>(), container = %self.inner.name);
        let _guard = span.enter();

        for dependency in T::dependencies() {
            let service = match self.get_any(dependency.service) {
                Ok(service) => service,
                Err(ResolveErrorKind::NotFound { .. }) => {
                    let err = InjectErrorKind::DependencyNotFound {
                        field: dependency.field,
                        service: dependency.service,
                    };
                    warn!("{}", err);
                    return Err(err);
                }
                Err(source) => {
                    return Err(InjectErrorKind::Resolve {
                        field: dependency.field,
                        source,
                    })
                }
            };
            target.assign(&dependency, service)?;
            debug!(field = dependency.field, service = dependency.service, "Injected");
        }
        Ok(())
    }

    fn entry_for_resolve(&self, name: &str) -> Result<Arc<Entry>, ResolveErrorKind> {
        let registry = self.inner.registry.read();
        let Some(entry) = registry.get(name) else {
            let err = ResolveErrorKind::NotFound { name: name.to_string() };
            warn!("{}", err);
            return Err(err);
        };

        // Marked under the lock, so a concurrent registration either lands before or sees the flag
        if !entry.mark_used() {
            debug!("Marked as used");
        }
        Ok(entry.clone())
    }

    fn resolve_entry(&self, entry: &Entry) -> Result<RcAny, ResolveErrorKind> {
        entry.resolve(self).map_err(|err| {
            error!("{}", err);
            ResolveErrorKind::Instantiate(err)
        })
    }
}

impl Container {
    /// Checks whether a name or an alias is registered, without resolving it.
    #[inline]
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.inner.registry.read().contains(name)
    }

    /// Removes the entry a name or an alias points at, with all of its aliases and cached instance.
    ///
    /// Returns `false` if there was nothing to remove.
    pub fn del(&self, name: &str) -> bool {
        let removed = self.inner.registry.write().remove(name);
        match removed {
            Some(entry) => {
                debug!(service = name, ?entry, container = %self.inner.name, "Removed");
                true
            }
            None => false,
        }
    }

    /// Drops all entries, aliases and cached instances.
    pub fn clear(&self) {
        self.inner.registry.write().clear();
        debug!(container = %self.inner.name, "Cleared");
    }

    /// Registered canonical names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.inner.registry.read().names()
    }

    /// Snapshot of the aliases, mapping each alias to its canonical name.
    #[must_use]
    pub fn aliases(&self) -> BTreeMap<String, String> {
        self.inner.registry.read().aliases()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.registry.read().len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Container {
    /// Unresolved payload of any kind. Doesn't mark the entry as used.
    ///
    /// # Errors
    /// Returns [`ResolveErrorKind::NotFound`] if neither a name nor an alias matches.
    pub fn raw(&self, name: &str) -> Result<Raw, ResolveErrorKind> {
        self.inner
            .registry
            .read()
            .get(name)
            .map(|entry| entry.raw())
            .ok_or_else(|| ResolveErrorKind::NotFound { name: name.to_string() })
    }

    /// Unresolved payload of a [`Kind::Value`] entry: the instance or the lazy producer.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<Raw> {
        match self.raw(name) {
            Ok(raw @ (Raw::Instance(_) | Raw::Lazy(_))) => Some(raw),
            _ => None,
        }
    }

    /// Producer of a [`Kind::Factory`] entry.
    #[must_use]
    pub fn factory(&self, name: &str) -> Option<Producer> {
        match self.raw(name) {
            Ok(Raw::Factory(producer)) => Some(producer),
            _ => None,
        }
    }

    #[must_use]
    pub fn kind(&self, name: &str) -> Option<Kind> {
        self.inner.registry.read().get(name).map(|entry| entry.kind())
    }

    /// Whether the entry has been resolved at least once, which freezes its registration.
    #[must_use]
    pub fn is_used(&self, name: &str) -> bool {
        self.inner.registry.read().get(name).is_some_and(|entry| entry.is_used())
    }
}

impl Debug for Container {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let registry = self.inner.registry.read();
        f.debug_struct("Container")
            .field("name", &self.inner.name)
            .field("names", &registry.names())
            .field("aliases", &registry.aliases())
            .finish()
    }
}
