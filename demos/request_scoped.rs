//! Request-scoped logging example
//!
//! Demonstrates child loggers carrying a request id, namespace overrides and
//! per-logger statistics.
//!
//! Run with: cargo run --example request_scoped

use rust_logger_facade::prelude::*;
use std::sync::Arc;
use std::thread;

fn handle_request(logger: &StandardLogger, request_id: &str, items: i64) {
    let log = logger.child(&[setter::request_id(request_id)]);

    log.info("request received", &[setter::add_metadata("items", items)]);
    if items > 3 {
        log.warnf("large batch of {} items", &[FieldValue::from(items)]);
    }
    log.debug("request finished", &[]);
}

fn main() -> Result<()> {
    println!("=== Rust Logger Facade - Request Scoped Example ===\n");

    let logger = Arc::new(
        StandardLogger::builder()
            .level(LogLevel::Info)
            .namespace("api")
            .printer(StdPrinter::stdout().with_timestamp_format(TimestampFormat::Rfc3339))
            .build(),
    );

    println!("1. Sequential requests:");
    handle_request(&logger, "req-001", 2);
    handle_request(&logger, "req-002", 5);

    println!("\n2. Concurrent requests:");
    let handles: Vec<_> = (0..4_i64)
        .map(|i| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || handle_request(&logger, &format!("req-1{:02}", i), i * 2))
        })
        .collect();
    for handle in handles {
        handle.join().expect("request thread panicked");
    }

    println!("\n3. Background worker with its own namespace:");
    let worker = logger.child(&[setter::namespace("worker"), setter::level(LogLevel::Debug)]);
    worker.debug("worker sees debug records", &[]);
    logger.debug("parent still hides them", &[]);

    let stats = logger.stats();
    println!(
        "\nParent logger: {} emitted, {} suppressed, {} failed",
        stats.emitted(),
        stats.suppressed(),
        stats.failed()
    );

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
