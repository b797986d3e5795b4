use alloc::{
    collections::BTreeMap,
    string::{String, ToString as _},
    sync::Arc,
    vec::Vec,
};

use crate::{entry::Entry, errors::RegisterErrorKind};

/// Storage behind a container: canonical entries and single-hop aliases.
///
/// An alias always points at a canonical name with an entry and never shares its name with one,
/// so a lookup resolves at most one alias.
#[derive(Default)]
pub(crate) struct Registry {
    entries: BTreeMap<String, Arc<Entry>>,
    aliases: BTreeMap<String, String>,
}

impl Registry {
    #[inline]
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            aliases: BTreeMap::new(),
        }
    }

    #[inline]
    #[must_use]
    pub(crate) fn canonical<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map_or(name, String::as_str)
    }

    /// Canonical name `alias` currently points at, if it's an alias.
    #[inline]
    #[must_use]
    pub(crate) fn alias_target(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub(crate) fn get(&self, name: &str) -> Option<&Arc<Entry>> {
        self.entries.get(self.canonical(name))
    }

    #[inline]
    #[must_use]
    pub(crate) fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Inserts an entry under a canonical name, replacing an unused one.
    ///
    /// The name isn't alias-resolved: registering a name that is currently an alias
    /// drops that alias in favour of the new entry.
    pub(crate) fn insert(&mut self, name: &str, entry: Entry) -> Result<Option<Arc<Entry>>, RegisterErrorKind> {
        if self.entries.get(name).is_some_and(|entry| entry.is_used()) {
            return Err(RegisterErrorKind::AlreadyInUse { name: name.to_string() });
        }

        self.aliases.remove(name);
        Ok(self.entries.insert(name.to_string(), Arc::new(entry)))
    }

    /// Points `alias` at `name`.
    /// Returns `false` if `name` has no entry of its own or `alias` is a canonical name.
    pub(crate) fn insert_alias(&mut self, name: &str, alias: &str) -> bool {
        if !self.entries.contains_key(name) || self.entries.contains_key(alias) {
            return false;
        }

        self.aliases.insert(alias.to_string(), name.to_string());
        true
    }

    /// Removes the entry `name` resolves to together with every alias pointing at it.
    pub(crate) fn remove(&mut self, name: &str) -> Option<Arc<Entry>> {
        let canonical = self.canonical(name).to_string();
        let entry = self.entries.remove(&canonical)?;
        self.aliases.retain(|_, target| *target != canonical);
        Some(entry)
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.aliases.clear();
    }

    #[inline]
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub(crate) fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    #[must_use]
    pub(crate) fn aliases(&self) -> BTreeMap<String, String> {
        self.aliases.clone()
    }
}
