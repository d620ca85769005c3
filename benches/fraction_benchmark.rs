// ============================================================================
// Fraction Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Normalization - GCD reduction on construction
// 2. Arithmetic - Wrapping operators vs checked variants vs policy context
// 3. Comparison - LCM-scaled ordering
// 4. Parsing - Decimal literals and the float-to-text path
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use exact_fraction::prelude::*;
use std::hint::black_box;

// ============================================================================
// Normalization Benchmarks
// ============================================================================

fn benchmark_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");

    let inputs = [
        ("already_reduced", 5i64, 6i64),
        ("small_common_factor", 6, 8),
        ("large_coprime", 9_223_372_036_854_775_807, 9_223_372_036_854_775_783),
        ("integer_fast_path", 42, 1),
    ];

    for (name, n, d) in inputs {
        group.bench_with_input(BenchmarkId::new("new", name), &(n, d), |b, &(n, d)| {
            b.iter(|| black_box(Fraction::new(black_box(n), black_box(d))))
        });
    }

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let a = Fraction::new(355, 113);
    let b = Fraction::new(-22, 7);
    let strict = Arithmetic::new(ArithmeticConfig::strict());

    group.bench_function("add_operator", |bench| {
        bench.iter(|| black_box(black_box(a) + black_box(b)))
    });

    group.bench_function("add_checked", |bench| {
        bench.iter(|| black_box(black_box(a).checked_add(black_box(b))))
    });

    group.bench_function("add_strict_context", |bench| {
        bench.iter(|| black_box(strict.add(black_box(a), black_box(b))))
    });

    group.bench_function("div_operator", |bench| {
        bench.iter(|| black_box(black_box(a) / black_box(b)))
    });

    for exp in [2, 8, 16] {
        group.bench_with_input(BenchmarkId::new("pow", exp), &exp, |bench, &exp| {
            bench.iter(|| black_box(Fraction::new(3, 2).pow(black_box(exp))))
        });
    }

    group.bench_function("sum_harmonic_20", |bench| {
        let terms: Vec<Fraction> = (1..=20).map(|d| Fraction::new(1, d)).collect();
        bench.iter(|| black_box(terms.iter().sum::<Fraction>()))
    });

    group.finish();
}

// ============================================================================
// Comparison Benchmarks
// ============================================================================

fn benchmark_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");

    let a = Fraction::new(1_000_003, 999_983);
    let b = Fraction::new(1_000_033, 1_000_037);

    group.bench_function("partial_cmp", |bench| {
        bench.iter(|| black_box(black_box(a).partial_cmp(&black_box(b))))
    });

    group.bench_function("eq", |bench| {
        bench.iter(|| black_box(black_box(a) == black_box(b)))
    });

    group.finish();
}

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for literal in ["42", "3.14", "-12345.678901", "0.0000000000009094947017729282379150390625"] {
        group.bench_with_input(
            BenchmarkId::new("from_str", literal.len()),
            literal,
            |b, literal| b.iter(|| black_box(literal.parse::<Fraction>())),
        );
    }

    group.bench_function("reject_invalid", |b| {
        b.iter(|| black_box(Fraction::from_decimal_str(black_box("12abc"))))
    });

    group.bench_function("from_f64_text", |b| {
        b.iter(|| black_box(Fraction::from(black_box(0.1f64))))
    });

    group.bench_function("from_f64_exact", |b| {
        b.iter(|| black_box(Fraction::from_f64_exact(black_box(0.1f64))))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_normalization,
    benchmark_arithmetic,
    benchmark_comparison,
    benchmark_parsing,
);

criterion_main!(benches);
