use dibox::{global, Container, Provider, ResolveErrorKind};
use tracing_test::traced_test;

// The global container is shared by the whole test binary, so everything runs in one test.
#[test]
#[traced_test]
fn test_global_facade() {
    global::clear();

    global::set("greeting", String::from("hello"));
    global::set_factory("counter", || Ok(1u32));
    global::set_singleton("pool", |container: Container| {
        Ok(format!("{}:pool", container.name()))
    });
    global::set_alias("greeting", ["hi"]);
    global::add("greeting", Provider::value(String::from("ignored")));

    assert!(global::has("hi"));
    assert_eq!(*global::get::<String>("hi").unwrap(), "hello");
    assert_eq!(*global::get::<u32>("counter").unwrap(), 1);
    assert_eq!(*global::get::<String>("pool").unwrap(), "global:pool");
    assert_eq!(global::names(), ["counter", "greeting", "pool"]);
    assert_eq!(global::aliases().get("hi").map(String::as_str), Some("greeting"));

    assert!(global().is_used("greeting"));
    assert!(global::try_register("greeting", Provider::value(String::new())).is_err());

    assert!(global::del("hi"));
    assert!(!global::has("greeting"));
    assert!(!global::del("greeting"));

    global::clear();
    assert!(global::names().is_empty());
    assert!(matches!(global::get_any("counter"), Err(ResolveErrorKind::NotFound { .. })));
}
