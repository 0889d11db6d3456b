// ============================================================================
// Calculator Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Formatting - f64 to display text, including the scientific fallback
// 2. Rounding - half-up vs half-to-even at several precisions
// 3. Dispatch - keystroke sequences through the full state machine
// ============================================================================

use calculator_engine::numeric::{format_number, parse_entry, round};
use calculator_engine::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn benchmark_format_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_number");

    let cases = [
        ("integer", 42.0),
        ("fraction", 1.0 / 3.0),
        ("scientific", 123_456_789_012_345.0),
        ("non_finite", f64::INFINITY),
    ];

    for (name, value) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &value, |b, value| {
            b.iter(|| black_box(format_number(black_box(*value))));
        });
    }

    group.finish();
}

fn benchmark_parse_entry(c: &mut Criterion) {
    c.bench_function("parse_entry", |b| {
        b.iter(|| black_box(parse_entry(black_box("12345,6789"))));
    });
}

// ============================================================================
// Rounding Benchmarks
// ============================================================================

fn benchmark_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("round");

    for places in [0u8, 2, 10] {
        group.bench_with_input(BenchmarkId::new("half_up", places), &places, |b, places| {
            b.iter(|| black_box(round(black_box(1.23456789), *places, false)));
        });

        group.bench_with_input(BenchmarkId::new("half_even", places), &places, |b, places| {
            b.iter(|| black_box(round(black_box(1.23456789), *places, true)));
        });
    }

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn benchmark_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    let chained: Vec<Action> = "12.5*4-7/3="
        .chars()
        .filter_map(|c| action_for_key(&c.to_string()))
        .collect();

    group.bench_function("chained_expression", |b| {
        let mut calc = Calculator::new(Settings::default(), Arc::new(NoOpEventHandler));
        b.iter(|| {
            calc.clear_all();
            for action in &chained {
                calc.dispatch(*action);
            }
            black_box(calc.display_text().len())
        });
    });

    group.bench_function("repeat_equals", |b| {
        let mut calc = Calculator::new(Settings::bankers(), Arc::new(NoOpEventHandler));
        for action in &chained {
            calc.dispatch(*action);
        }
        b.iter(|| {
            calc.dispatch(Action::Equals);
            black_box(calc.memory())
        });
    });

    group.bench_function("keymap_lookup", |b| {
        b.iter(|| black_box(action_for_key(black_box("Backspace"))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_format_number,
    benchmark_parse_entry,
    benchmark_round,
    benchmark_dispatch
);

criterion_main!(benches);
