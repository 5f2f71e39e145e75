// ============================================================================
// Money Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Core Arithmetic - add, integer multiply, guarded multiply, divide
// 2. Representation Comparison - the same product via f64 and rust_decimal
// 3. Construction - float and string ingestion paths
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fixed_money::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

// ============================================================================
// Core Arithmetic
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let p = Precision::new(2).unwrap();
    let m = Money::from_f64(1234.56, p).unwrap();
    let n = Money::from_f64(78.9, p).unwrap();

    group.bench_function("checked_add", |b| {
        b.iter(|| black_box(m).checked_add(black_box(n)).unwrap())
    });

    group.bench_function("checked_mul", |b| {
        b.iter(|| black_box(m).checked_mul(black_box(n)).unwrap())
    });

    group.bench_function("mul_f64", |b| {
        b.iter(|| black_box(m).mul_f64(black_box(78.9)).unwrap())
    });

    group.bench_function("checked_div", |b| {
        b.iter(|| black_box(m).checked_div(black_box(n)).unwrap())
    });

    group.finish();
}

// ============================================================================
// Representation Comparison
// The same multiply through f64 and rust_decimal, for scale
// ============================================================================

fn benchmark_representations(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply_comparison");

    let p = Precision::new(2).unwrap();
    let m = Money::from_f64(1234.56, p).unwrap();

    group.bench_function("fixed_money", |b| {
        b.iter(|| black_box(m).mul_f64(black_box(78.9)).unwrap())
    });

    group.bench_function("f64", |b| {
        b.iter(|| black_box(1234.56f64) * black_box(78.9f64))
    });

    let dm = Decimal::from_str("1234.56").unwrap();
    let dn = Decimal::from_str("78.9").unwrap();
    group.bench_function("rust_decimal", |b| {
        b.iter(|| black_box(dm) * black_box(dn))
    });

    group.finish();
}

// ============================================================================
// Construction
// ============================================================================

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    let p = Precision::new(2).unwrap();

    group.bench_function("from_f64", |b| {
        b.iter(|| Money::from_f64(black_box(19.99), p).unwrap())
    });

    group.bench_function("parse", |b| {
        b.iter(|| Money::parse(black_box("19.99"), p).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_arithmetic,
    benchmark_representations,
    benchmark_construction
);
criterion_main!(benches);
