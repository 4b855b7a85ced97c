//! JSON output example
//!
//! Demonstrates the JSON lines printer and a closure-based printer.
//!
//! Run with: cargo run --example json_output

use rust_logger_facade::prelude::*;
use rust_logger_facade::Metadata;
use std::io;

fn main() -> Result<()> {
    println!("=== Rust Logger Facade - JSON Output Example ===\n");

    println!("1. JSON lines:");
    let logger = StandardLogger::builder()
        .level(LogLevel::Debug)
        .namespace("orders")
        .printer(JsonPrinter::stdout())
        .build();

    let mut metadata = Metadata::new();
    metadata.insert("order_id".to_string(), FieldValue::from(1042_i64));
    metadata.insert("total".to_string(), FieldValue::from(99.5));

    let request = logger.child(&[setter::request_id("abc-123")]);
    request.info("order created", &[setter::metadata(metadata)]);
    request.warn(
        "payment retried",
        &[setter::error(io::Error::new(io::ErrorKind::TimedOut, "gateway timeout"))],
    );
    request.debugf("{} items reserved", &[FieldValue::from(3_i64)]);

    println!("\n2. Closure printer:");
    let compact = StandardLogger::builder()
        .level(LogLevel::Info)
        .printer(|level: LogLevel, message: &str, options: &Options| -> Result<()> {
            println!("{}|{}|{}", level.rank(), options.request_id().unwrap_or("-"), message);
            Ok(())
        })
        .build();
    compact.info("compact line", &[]);
    compact.error("compact error", &[setter::request_id("xyz-9")]);

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
