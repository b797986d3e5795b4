#![allow(dead_code)]

use criterion::{criterion_group, criterion_main, Criterion};
use dibox::{Container, InstantiateErrorKind};
use std::{hint::black_box, sync::Arc};

struct A(Arc<B>, Arc<C>);
struct B(i32);
struct C(Arc<CA>);
struct CA;

#[inline]
fn container_with_services() -> Container {
    let container = Container::new();
    container
        .set("b", B(2))
        .set_singleton("ca", || Ok(CA))
        .set_singleton("c", |container: Container| -> Result<C, InstantiateErrorKind> {
            Ok(C(container.get("ca")?))
        })
        .set_factory("a", |container: Container| -> Result<A, InstantiateErrorKind> {
            Ok(A(container.get("b")?, container.get("c")?))
        })
        .set_alias("b", ["b-alt"]);
    container
}

#[inline]
fn container_register() {
    let container = Container::new();
    for name in ["s1", "s2", "s3", "s4", "s5", "s6"] {
        container.set(name, ());
    }
    container.set_alias("s1", ["a1", "a2", "a3"]);
}

#[inline]
fn container_get<T: Send + Sync + 'static>(container: &Container, name: &str) {
    let _ = black_box(container.get::<T>(name).unwrap());
}

fn criterion_benchmark(c: &mut Criterion) {
    let container = container_with_services();

    c.bench_function("container_register", |b| b.iter(container_register))
        .bench_function("container_get_value", |b| b.iter(|| container_get::<B>(&container, "b")))
        .bench_function("container_get_value_by_alias", |b| {
            b.iter(|| container_get::<B>(&container, "b-alt"))
        })
        .bench_function("container_get_singleton", |b| b.iter(|| container_get::<C>(&container, "c")))
        .bench_function("container_get_factory", |b| b.iter(|| container_get::<A>(&container, "a")))
        .bench_function("container_get_singleton_first", |b| {
            b.iter(|| container_get::<C>(&container_with_services(), "c"))
        });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
