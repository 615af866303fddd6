//! Criterion benchmarks for pricer_core attribute evaluation.
//!
//! Measures read cost through chains of dependent attributes of different
//! lengths, and the cost of rebinding an input then re-reading the tail.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::lazy::{computation, AttributeHandle, MathObject};

/// Builds `x0 = 1`, `x{i} = x{i-1} + 1` and returns the object and the tail.
fn build_chain(len: usize) -> (MathObject, AttributeHandle) {
    let mut object = MathObject::new("chain");
    let mut tail = object.define("x0", MathObject::wrap(1.0)).unwrap();
    for i in 1..len {
        let prev = tail.clone();
        tail = object
            .define(&format!("x{}", i), computation(move || Ok(prev.evaluate()? + 1.0)))
            .unwrap();
    }
    (object, tail)
}

/// Benchmark reading the end of an attribute chain.
fn bench_chain_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_evaluation");

    for len in [1, 10, 100, 500] {
        let (_object, tail) = build_chain(len);
        group.bench_with_input(BenchmarkId::new("read", len), &tail, |b, tail| {
            b.iter(|| black_box(tail.evaluate().unwrap()));
        });
    }

    group.finish();
}

/// Benchmark rebinding the head then reading the tail.
fn bench_rebind_and_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebind_and_read");

    for len in [10, 100] {
        let (object, tail) = build_chain(len);
        group.bench_function(BenchmarkId::new("rebind", len), |b| {
            let mut value = 0.0;
            b.iter(|| {
                value += 1.0;
                object.set("x0", MathObject::wrap(black_box(value))).unwrap();
                black_box(tail.evaluate().unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_chain_evaluation, bench_rebind_and_read);
criterion_main!(benches);
