use alloc::sync::Arc;
use core::fmt::{self, Debug, Formatter};
use tracing::debug;

use crate::{
    any::{RcAny, TypeInfo},
    errors::InstantiateErrorKind,
    Container,
};

/// A closure that creates a service.
///
/// Implemented for `Fn() -> Result<T, InstantiateErrorKind>` and for
/// `Fn(Container) -> Result<T, InstantiateErrorKind>`, the latter receives the container
/// the service is being resolved from, so it can resolve other services by name.
pub trait Instantiator<Args>: Send + Sync + 'static {
    type Provides: Send + Sync + 'static;

    #[allow(clippy::missing_errors_doc)]
    fn instantiate(&self, container: &Container) -> Result<Self::Provides, InstantiateErrorKind>;
}

impl<F, Response> Instantiator<()> for F
where
    F: Fn() -> Result<Response, InstantiateErrorKind> + Send + Sync + 'static,
    Response: Send + Sync + 'static,
{
    type Provides = Response;

    #[inline]
    fn instantiate(&self, _container: &Container) -> Result<Self::Provides, InstantiateErrorKind> {
        self()
    }
}

impl<F, Response> Instantiator<(Container,)> for F
where
    F: Fn(Container) -> Result<Response, InstantiateErrorKind> + Send + Sync + 'static,
    Response: Send + Sync + 'static,
{
    type Provides = Response;

    #[inline]
    fn instantiate(&self, container: &Container) -> Result<Self::Provides, InstantiateErrorKind> {
        self(container.clone())
    }
}

type BoxedInstantiator = Arc<dyn Fn(&Container) -> Result<RcAny, InstantiateErrorKind> + Send + Sync>;

/// Type-erased producer of a lazy singleton or factory entry.
#[derive(Clone)]
pub struct Producer {
    instantiator: BoxedInstantiator,
    provides: TypeInfo,
}

impl Producer {
    #[must_use]
    pub(crate) fn new<Inst, Args>(instantiator: Inst) -> Self
    where
        Inst: Instantiator<Args>,
    {
        Self {
            instantiator: Arc::new(move |container: &Container| {
                let dependency = instantiator.instantiate(container)?;

                debug!("Produced");

                Ok(Arc::new(dependency) as RcAny)
            }),
            provides: TypeInfo::of::<Inst::Provides>(),
        }
    }

    /// Type of the values this producer creates.
    #[inline]
    #[must_use]
    pub fn provides(&self) -> TypeInfo {
        self.provides
    }

    /// Invokes the producer directly.
    ///
    /// Unlike [`Container::get_any`], this neither marks the entry as used nor caches the result.
    ///
    /// # Errors
    /// Returns whatever the producer fails with.
    #[inline]
    pub fn produce(&self, container: &Container) -> Result<RcAny, InstantiateErrorKind> {
        (self.instantiator)(container)
    }
}

impl Debug for Producer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producer").field("provides", &self.provides.name).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, sync::Arc};
    use core::sync::atomic::{AtomicU8, Ordering};
    use tracing_test::traced_test;

    use super::{Instantiator, Producer};
    use crate::{any::TypeInfo, Container, InstantiateErrorKind};

    #[test]
    #[allow(dead_code)]
    fn test_instantiator_helper() {
        fn producer<Args, I: Instantiator<Args>>(_inst: I) {}

        producer(|| Ok(()));
        producer(|_: Container| Ok(1u8));
    }

    #[test]
    #[traced_test]
    fn test_producer_runs_on_each_call() {
        let call_count = Arc::new(AtomicU8::new(0));
        let producer = Producer::new({
            let call_count = call_count.clone();
            move || {
                call_count.fetch_add(1, Ordering::SeqCst);
                Ok(String::from("ABC"))
            }
        });
        let container = Container::new();

        let first = producer.produce(&container).unwrap();
        let second = producer.produce(&container).unwrap();

        assert_eq!(first.downcast::<String>().unwrap().as_str(), "ABC");
        assert_eq!(second.downcast::<String>().unwrap().as_str(), "ABC");
        assert_eq!(call_count.load(Ordering::SeqCst), 2);
        assert_eq!(producer.provides(), TypeInfo::of::<String>());
    }

    #[test]
    #[traced_test]
    fn test_producer_with_container() {
        let container = Container::new();
        container.set("prefix", String::from("db"));

        let producer = Producer::new(|container: Container| -> Result<String, InstantiateErrorKind> {
            let prefix = container.get::<String>("prefix")?;
            Ok(alloc::format!("{prefix}.primary"))
        });

        let value = producer.produce(&container).unwrap();
        assert_eq!(value.downcast::<String>().unwrap().as_str(), "db.primary");
    }

    #[test]
    #[traced_test]
    fn test_producer_error_passthrough() {
        let producer = Producer::new(|| Err::<u8, _>(InstantiateErrorKind::from(anyhow::anyhow!("boom"))));

        let err = producer.produce(&Container::new()).unwrap_err();
        assert!(matches!(err, InstantiateErrorKind::Custom(_)));
        assert_eq!(alloc::string::ToString::to_string(&err), "boom");
    }
}
