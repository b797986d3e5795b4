use dibox::{Container, Dependency, InjectErrorKind, Injectable, InstantiateErrorKind};
use std::sync::Arc;
use tracing_test::traced_test;

struct Database {
    url: String,
}

struct Cache;

#[derive(Injectable, Default)]
struct Handler {
    #[inject("database")]
    db: Option<Arc<Database>>,
    #[inject(" cache , lazy ")]
    cache: Option<Arc<Cache>>,
    #[inject("")]
    skipped: Option<Arc<Cache>>,
    requests: u64,
}

#[derive(Injectable)]
struct Required<T: Send + Sync + 'static> {
    #[inject("value")]
    value: Arc<T>,
}

#[derive(Injectable)]
struct Unit;

#[test]
fn test_dependencies() {
    assert_eq!(
        Handler::dependencies(),
        [Dependency::new("db", "database"), Dependency::new("cache", "cache")]
    );
    assert_eq!(Required::<u8>::dependencies(), [Dependency::new("value", "value")]);
    assert!(Unit::dependencies().is_empty());
}

#[test]
#[traced_test]
fn test_inject() {
    let container = Container::new();
    container
        .set_singleton("postgres", || {
            Ok(Database {
                url: String::from("postgres://localhost"),
            })
        })
        .set_alias("postgres", ["database"])
        .set("cache", Cache);

    let mut handler = Handler {
        requests: 7,
        ..Default::default()
    };
    container.inject(&mut handler).unwrap();

    assert_eq!(handler.db.as_ref().unwrap().url, "postgres://localhost");
    assert!(handler.cache.is_some());
    assert!(handler.skipped.is_none());
    assert_eq!(handler.requests, 7);
    assert!(container.is_used("postgres"));
}

#[test]
#[traced_test]
fn test_inject_generic() {
    let container = Container::new();
    container.set_factory("value", |container: Container| -> Result<String, InstantiateErrorKind> {
        Ok(container.name().to_owned())
    });

    let mut required = Required {
        value: Arc::new(String::new()),
    };
    container.inject(&mut required).unwrap();

    assert_eq!(*required.value, "anonymous");
}

#[test]
#[traced_test]
fn test_inject_not_found() {
    let container = Container::new();
    container.set("database", Database { url: String::new() });

    let mut handler = Handler::default();
    let err = container.inject(&mut handler).unwrap_err();

    assert!(matches!(
        err,
        InjectErrorKind::DependencyNotFound {
            field: "cache",
            service: "cache"
        }
    ));
    assert!(handler.db.is_some());
}

#[test]
#[traced_test]
fn test_inject_incorrect_type() {
    let container = Container::new();
    container.set("value", 1u32);

    let mut required = Required { value: Arc::new(1u64) };
    let err = container.inject(&mut required).unwrap_err();

    assert!(matches!(
        err,
        InjectErrorKind::IncorrectType {
            field: "value",
            service: "value",
            ..
        }
    ));
    assert_eq!(*required.value, 1);
}

#[test]
fn test_assign_unknown_field() {
    let mut unit = Unit;
    let err = unit
        .assign(&Dependency::new("missing", "missing"), Arc::new(()))
        .unwrap_err();

    assert!(matches!(err, InjectErrorKind::UnknownField { field: "missing" }));
}
