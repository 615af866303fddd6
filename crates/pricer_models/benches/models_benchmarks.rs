//! Criterion benchmarks for pricer_models instruments.
//!
//! Bond reads scale with the number of coupon periods, so prices and
//! convexities are measured over several maturities.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::instruments::{Bond, EuropeanOption, OptionKind};

fn bond(maturity: f64) -> Bond {
    Bond::builder("bench")
        .face_value(1000.0)
        .yield_to_maturity(0.02)
        .maturity(maturity)
        .coupon_rate(0.05)
        .frequency(2.0)
        .build()
        .unwrap()
}

/// Benchmark bond price and convexity reads.
fn bench_bond(c: &mut Criterion) {
    let mut group = c.benchmark_group("bond");

    for maturity in [1.0, 10.0, 30.0] {
        let bond = bond(maturity);
        group.bench_with_input(BenchmarkId::new("price", maturity), &bond, |b, bond| {
            b.iter(|| black_box(bond.price().unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("convexity", maturity), &bond, |b, bond| {
            b.iter(|| black_box(bond.convexity().unwrap()));
        });
    }

    group.finish();
}

/// Benchmark European option price and Greeks.
fn bench_european(c: &mut Criterion) {
    let mut group = c.benchmark_group("european_option");
    let call = EuropeanOption::builder("bench", OptionKind::Call)
        .rate(0.05)
        .maturity(1.0)
        .build()
        .unwrap();

    group.bench_function("price", |b| b.iter(|| black_box(call.price().unwrap())));
    group.bench_function("delta", |b| b.iter(|| black_box(call.delta().unwrap())));
    group.bench_function("vega", |b| b.iter(|| black_box(call.vega().unwrap())));

    group.finish();
}

criterion_group!(benches, bench_bond, bench_european);
criterion_main!(benches);
