use alloc::sync::Arc;

use crate::{
    any::{RcAny, TypeInfo},
    config::Config,
    entry::Kind,
    instantiator::{Instantiator, Producer},
};

/// What gets registered under a name: a ready value, a lazy singleton or a factory.
#[derive(Debug, Clone)]
pub struct Provider {
    pub(crate) source: Source,
    pub(crate) type_info: TypeInfo,
}

#[derive(Debug, Clone)]
pub(crate) enum Source {
    Instance(RcAny),
    Lazy(Producer),
    Factory(Producer),
}

impl Provider {
    /// A value created outside the container, returned as is on every resolution.
    #[inline]
    #[must_use]
    pub fn value<T: Send + Sync + 'static>(value: T) -> Self {
        Self::value_rc(Arc::new(value))
    }

    /// Same as [`Self::value`], for values that are already shared.
    #[inline]
    #[must_use]
    pub fn value_rc<T: Send + Sync + 'static>(value: Arc<T>) -> Self {
        Self {
            source: Source::Instance(value),
            type_info: TypeInfo::of::<T>(),
        }
    }

    /// A producer invoked once, on the first resolution. Its result is shared afterwards.
    #[inline]
    #[must_use]
    pub fn singleton<Inst, Args>(instantiator: Inst) -> Self
    where
        Inst: Instantiator<Args>,
    {
        Self::with_config(instantiator, Config::singleton())
    }

    /// A producer invoked on every resolution.
    #[inline]
    #[must_use]
    pub fn factory<Inst, Args>(instantiator: Inst) -> Self
    where
        Inst: Instantiator<Args>,
    {
        Self::with_config(instantiator, Config::factory())
    }

    #[inline]
    #[must_use]
    pub fn with_config<Inst, Args>(instantiator: Inst, config: Config) -> Self
    where
        Inst: Instantiator<Args>,
    {
        let producer = Producer::new(instantiator);
        let type_info = producer.provides();
        let source = if config.cache_provides {
            Source::Lazy(producer)
        } else {
            Source::Factory(producer)
        };
        Self { source, type_info }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self.source {
            Source::Instance(_) | Source::Lazy(_) => Kind::Value,
            Source::Factory(_) => Kind::Factory,
        }
    }

    /// Type of the service this provider registers.
    #[inline]
    #[must_use]
    pub fn provides(&self) -> TypeInfo {
        self.type_info
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{Provider, Source};
    use crate::{Config, Kind, TypeInfo};

    #[test]
    fn test_provider_kinds() {
        let value = Provider::value(1u32);
        let singleton = Provider::singleton(|| Ok(String::new()));
        let factory = Provider::factory(|| Ok(String::new()));

        assert_eq!(value.kind(), Kind::Value);
        assert_eq!(singleton.kind(), Kind::Value);
        assert_eq!(factory.kind(), Kind::Factory);

        assert!(matches!(value.source, Source::Instance(_)));
        assert!(matches!(singleton.source, Source::Lazy(_)));
        assert!(matches!(factory.source, Source::Factory(_)));
    }

    #[test]
    fn test_provider_with_config() {
        let cached = Provider::with_config(|| Ok(0u8), Config { cache_provides: true });
        let uncached = Provider::with_config(|| Ok(0u8), Config { cache_provides: false });

        assert_eq!(cached.kind(), Kind::Value);
        assert_eq!(uncached.kind(), Kind::Factory);
        assert_eq!(cached.provides(), TypeInfo::of::<u8>());
    }
}
