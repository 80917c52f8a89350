//! Criterion benchmarks for rust_semantic_logger

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_semantic_logger::prelude::*;
use rust_semantic_logger::{info, safe_format};
use std::sync::Arc;

fn bench_config() -> LoggerConfig {
    LoggerConfig::builder()
        .application("bench")
        .host_name("bench-host")
        .stack_walker(Arc::new(NoopWalker))
        .build()
}

// ============================================================================
// Record Construction Benchmarks
// ============================================================================

fn bench_record_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new_noop_walker", |b| {
        b.iter(|| {
            let record = LogRecord::new_with(
                &NoopWalker,
                black_box(LogLevel::Info),
                black_box("Request {} served in {}ms"),
                &[&42, &7],
            );
            black_box(record)
        });
    });

    group.bench_function("new_backtrace_walker", |b| {
        b.iter(|| {
            let record = LogRecord::new(
                black_box(LogLevel::Info),
                black_box("Request {} served in {}ms"),
                &[&42, &7],
            );
            black_box(record)
        });
    });

    group.bench_function("finalize", |b| {
        let config = bench_config();
        b.iter(|| {
            let mut record = LogRecord::new_with(&NoopWalker, LogLevel::Info, "m", &[]);
            record.finalize_known_fields(&config);
            black_box(record)
        });
    });

    group.finish();
}

fn bench_safe_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("safe_format");
    group.throughput(Throughput::Elements(1));

    group.bench_function("well_formed", |b| {
        b.iter(|| safe_format(black_box("user {} from {} took {}"), &[&"alice", &"10.0.0.1", &12]));
    });

    group.bench_function("malformed", |b| {
        b.iter(|| safe_format(black_box("user {} from {5} took {:"), &[&"alice"]));
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out");
    group.throughput(Throughput::Elements(1));

    for sink_count in [1usize, 4, 16] {
        let mut dispatcher = MultiSink::with_config(bench_config());
        for _ in 0..sink_count {
            dispatcher.add_sink(Box::new(NullSink::new()));
        }

        group.bench_with_input(
            BenchmarkId::new("null_sinks", sink_count),
            &dispatcher,
            |b, dispatcher| {
                b.iter(|| {
                    let record = LogRecord::new_with(&NoopWalker, LogLevel::Info, "m", &[]);
                    dispatcher.log(LogLevel::Info, "m", black_box(record));
                });
            },
        );
    }

    group.bench_function("macro_memory_sink", |b| {
        let memory = MemorySink::new();
        let dispatcher = MultiSink::builder()
            .config(bench_config())
            .sink(memory.clone())
            .build();
        b.iter(|| {
            info!(dispatcher, "Request {} served", black_box(1));
            if memory.len() > 10_000 {
                memory.clear();
            }
        });
    });

    group.finish();
}

fn bench_concurrent_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_dispatch");

    let dispatcher = Arc::new(
        MultiSink::builder()
            .config(bench_config())
            .sink(NullSink::new())
            .sink(NullSink::new())
            .build(),
    );

    group.bench_function("multi_thread_4", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let dispatcher = Arc::clone(&dispatcher);
                    std::thread::spawn(move || {
                        let record =
                            LogRecord::new_with(&NoopWalker, LogLevel::Info, "Concurrent", &[]);
                        dispatcher.log(LogLevel::Info, "Concurrent", record);
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
// Serialization Benchmarks
// ============================================================================

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");

    let mut record = LogRecord::new_with(&NoopWalker, LogLevel::Warn, "Disk at {}%", &[&91])
        .with_tags(["disk", "alert"])
        .with_thread_name("monitor");
    record.finalize_known_fields(&bench_config());

    group.bench_function("json", |b| {
        b.iter(|| black_box(&record).to_json().unwrap());
    });

    group.bench_function("text", |b| {
        b.iter(|| OutputFormat::Text.format(black_box(&record), &TimestampFormat::Iso8601));
    });

    group.bench_function("logfmt", |b| {
        b.iter(|| OutputFormat::Logfmt.format(black_box(&record), &TimestampFormat::Iso8601));
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_record_creation,
    bench_safe_format,
    bench_fan_out,
    bench_concurrent_dispatch,
    bench_serialization
);

criterion_main!(benches);
