//! Criterion benchmarks for rust_logger_facade

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_logger_facade::core::template;
use rust_logger_facade::prelude::*;
use rust_logger_facade::Registry;
use std::io;
use std::sync::Arc;

fn discard_logger(level: LogLevel) -> StandardLogger {
    StandardLogger::builder()
        .level(level)
        .namespace("bench")
        .printer(StdPrinter::new(io::sink()))
        .build()
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("builder", |b| {
        b.iter(|| black_box(discard_logger(LogLevel::Info)));
    });

    let parent = discard_logger(LogLevel::Info);
    group.bench_function("child_with_request_id", |b| {
        b.iter(|| black_box(parent.child(&[setter::request_id(black_box("abc-123"))])));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_text_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_logging");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger(LogLevel::Trace);

    group.bench_function("message_only", |b| {
        b.iter(|| logger.info(black_box("Benchmark message"), &[]));
    });

    group.bench_function("formatted", |b| {
        b.iter(|| {
            logger.infof(
                black_box("user {} did {}"),
                &[FieldValue::from(42_i64), FieldValue::from("login")],
            )
        });
    });

    group.bench_function("with_metadata", |b| {
        b.iter(|| {
            logger.warn(
                black_box("Benchmark message"),
                &[
                    setter::add_metadata("user_id", 42_i64),
                    setter::add_metadata("action", "login"),
                ],
            )
        });
    });

    group.finish();
}

fn bench_json_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_logging");
    group.throughput(Throughput::Elements(1));

    let logger = StandardLogger::builder()
        .level(LogLevel::Info)
        .printer(JsonPrinter::new(io::sink()))
        .build();

    group.bench_function("with_metadata", |b| {
        b.iter(|| {
            logger.info(
                black_box("Benchmark message"),
                &[setter::request_id("abc-123"), setter::add_metadata("count", 3_i64)],
            )
        });
    });

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger(LogLevel::Warn);

    group.bench_function("below_threshold", |b| {
        b.iter(|| logger.debug(black_box("This should be filtered"), &[]));
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| logger.error(black_box("This should be logged"), &[]));
    });

    group.bench_function("parse_level", |b| {
        b.iter(|| black_box(LogLevel::parse(black_box("Warning"))));
    });

    group.finish();
}

// ============================================================================
// Option Evaluation Benchmarks
// ============================================================================

fn bench_option_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("option_evaluation");
    group.throughput(Throughput::Elements(1));

    let setters = [
        setter::namespace("svc"),
        setter::request_id("abc-123"),
        setter::add_metadata("k1", "v1"),
        setter::add_metadata("k2", 2_i64),
    ];

    group.bench_function("evaluate_4_setters", |b| {
        b.iter(|| black_box(Options::evaluate(black_box(&setters))));
    });

    let args = [FieldValue::from("alice"), FieldValue::from(3_i64)];
    group.bench_function("render_template", |b| {
        b.iter(|| black_box(template::render(black_box("{} logged in {} times"), &args)));
    });

    group.finish();
}

// ============================================================================
// Registry Benchmarks
// ============================================================================

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    let registry = Arc::new(
        Registry::with_config_source(|_| None)
            .with_default_printer(|| Arc::new(StdPrinter::new(io::sink()))),
    );
    registry.get();

    group.bench_function("get_installed", |b| {
        b.iter(|| black_box(registry.get()));
    });

    group.bench_function("get_multi_thread_4", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let registry = Arc::clone(&registry);
                    std::thread::spawn(move || {
                        registry.get().error(black_box("Concurrent message"), &[]);
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_logger_creation,
    bench_text_logging,
    bench_json_logging,
    bench_level_filtering,
    bench_option_evaluation,
    bench_registry
);

criterion_main!(benches);
