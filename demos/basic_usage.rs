//! Basic dispatcher usage example
//!
//! Demonstrates fanning records out to a console and a file sink, custom
//! levels, benchmarking, and the fatal path.
//!
//! Run with: cargo run --example basic_usage

use rust_semantic_logger::prelude::*;
use rust_semantic_logger::{debug, error, fatal, info, log, trace, warn};

fn main() -> Result<()> {
    println!("=== Rust Semantic Logger - Basic Usage Example ===\n");

    let log_path = std::env::temp_dir().join("semantic_logger_demo.log");

    let dispatcher = MultiSink::builder()
        .config(LoggerConfig::builder().application("basic_usage").build())
        .sink(ConsoleSink::new())
        .sink(FileSink::new(&log_path)?)
        .build();

    println!("1. Logging at different levels:");
    trace!(dispatcher, "This is a trace message");
    debug!(dispatcher, "This is a debug message");
    info!(dispatcher, "This is an info message");
    warn!(dispatcher, "This is a warning message");
    error!(dispatcher, "This is an error message");

    println!("\n2. Custom level and tags:");
    let audit = LogLevel::Custom(42);
    log!(dispatcher, audit, "Audit event {}", "login");
    let record = LogRecord::new(LogLevel::Info, "Order {} shipped", &[&1001])
        .with_tags(["orders", "shipping"])
        .with_thread_name("main");
    dispatcher.log(LogLevel::Info, "Order shipped", record);

    println!("\n3. Runtime templates degrade instead of failing:");
    let template = "Missing {} and {}";
    dispatcher.log(
        LogLevel::Warn,
        template,
        LogRecord::new(LogLevel::Warn, template, &[&"one"]),
    );

    println!("\n4. Benchmarking an operation:");
    dispatcher.benchmark_info(LogLevel::Info, "Summed a million numbers", &mut |_sink| {
        let total: u64 = (0..1_000_000u64).sum();
        std::hint::black_box(total);
    });

    println!("\n5. Fatal path (caught for the demo):");
    let result: std::result::Result<(), FatalError> = catch_fatal(|| {
        fatal!(dispatcher, "Unable to continue: {}", "configuration missing");
    });
    if let Err(e) = result {
        println!("   Caught fatal: {}", e.record.message);
        println!("   Backtrace frames: {}", e.record.backtrace.len());
    }

    dispatcher.flush()?;
    println!("\nFile output written to {}", log_path.display());
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
