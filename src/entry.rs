use core::{
    fmt::{self, Debug, Formatter},
    sync::atomic::{AtomicBool, Ordering},
};
use parking_lot::Mutex;
use tracing::debug;

use crate::{
    any::{RcAny, TypeInfo},
    errors::InstantiateErrorKind,
    instantiator::Producer,
    provider::{Provider, Source},
    Container,
};

/// Kind of a registered service, fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A ready value or a lazy singleton, resolved to the same instance every time.
    Value,
    /// A producer invoked on every resolution.
    Factory,
}

/// Unresolved payload of an entry.
#[derive(Debug, Clone)]
pub enum Raw {
    Instance(RcAny),
    Lazy(Producer),
    Factory(Producer),
}

pub(crate) struct Entry {
    payload: Payload,
    type_info: TypeInfo,
    used: AtomicBool,
}

enum Payload {
    Instance(RcAny),
    Lazy {
        producer: Producer,
        instance: Mutex<Option<RcAny>>,
    },
    Factory(Producer),
}

impl From<Provider> for Entry {
    fn from(Provider { source, type_info }: Provider) -> Self {
        let payload = match source {
            Source::Instance(value) => Payload::Instance(value),
            Source::Lazy(producer) => Payload::Lazy {
                producer,
                instance: Mutex::new(None),
            },
            Source::Factory(producer) => Payload::Factory(producer),
        };
        Self {
            payload,
            type_info,
            used: AtomicBool::new(false),
        }
    }
}

impl Debug for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("kind", &self.kind())
            .field("type", &self.type_info.name)
            .field("used", &self.is_used())
            .finish()
    }
}

impl Entry {
    #[inline]
    pub(crate) fn kind(&self) -> Kind {
        match self.payload {
            Payload::Instance(_) | Payload::Lazy { .. } => Kind::Value,
            Payload::Factory(_) => Kind::Factory,
        }
    }

    #[inline]
    pub(crate) fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    #[inline]
    pub(crate) fn is_used(&self) -> bool {
        self.used.load(Ordering::Acquire)
    }

    /// Returns `true` if the entry was already marked before.
    #[inline]
    pub(crate) fn mark_used(&self) -> bool {
        self.used.swap(true, Ordering::AcqRel)
    }

    pub(crate) fn raw(&self) -> Raw {
        match &self.payload {
            Payload::Instance(value) => Raw::Instance(value.clone()),
            Payload::Lazy { producer, .. } => Raw::Lazy(producer.clone()),
            Payload::Factory(producer) => Raw::Factory(producer.clone()),
        }
    }

    /// Resolves the payload into an instance.
    ///
    /// A lazy payload keeps its lock across the cache check, the producer call and the cache fill,
    /// so concurrent first resolutions run the producer at most once.
    /// A failed production isn't cached.
    pub(crate) fn resolve(&self, container: &Container) -> Result<RcAny, InstantiateErrorKind> {
        match &self.payload {
            Payload::Instance(value) => Ok(value.clone()),
            Payload::Factory(producer) => producer.produce(container),
            Payload::Lazy { producer, instance } => {
                let mut guard = instance.lock();
                if let Some(dependency) = guard.as_ref() {
                    debug!("Found in cache");
                    return Ok(dependency.clone());
                }
                debug!("Not found in cache");

                let dependency = producer.produce(container)?;
                *guard = Some(dependency.clone());
                debug!("Cached");

                Ok(dependency)
            }
        }
    }
}
