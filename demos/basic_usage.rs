//! Basic logger usage example
//!
//! Demonstrates the process-wide logger, the per-level methods and the
//! call-site macros.
//!
//! Run with: LOG_LEVEL=trace cargo run --example basic_usage

use rust_logger_facade::prelude::*;
use rust_logger_facade::{errorf, info, registry};
use std::io;

fn main() -> Result<()> {
    println!("=== Rust Logger Facade - Basic Usage Example ===\n");

    // The first access builds a default logger from LOG_LEVEL / LOG_NAMESPACE
    println!("1. Process-wide default logger:");
    let logger = registry::get();
    logger.trace("This is a trace message", &[]);
    logger.debug("This is a debug message", &[]);
    logger.info("This is an info message", &[]);
    logger.warn("This is a warning message", &[]);
    logger.error("This is an error message", &[]);
    logger.fatal("This is a fatal message (the process keeps running)", &[]);

    println!("\n2. Explicit logger with colours and a namespace:");
    let logger = StandardLogger::builder()
        .level(LogLevel::Info)
        .namespace("demo")
        .printer(StdPrinter::stdout().with_colors(true))
        .build();
    logger.debug("Debug message (hidden)", &[]);
    logger.info("Info message (visible)", &[]);
    logger.warnf("Retry {} of {}", &[FieldValue::from(2_i64), FieldValue::from(5_i64)]);

    println!("\n3. Errors, metadata and call sites:");
    let traced = StandardLogger::builder()
        .level(LogLevel::Info)
        .printer(StdPrinter::stdout().with_error_trace(true))
        .build();
    let err = io::Error::new(io::ErrorKind::NotFound, "config.toml missing");
    info!(traced, "Loading configuration", setter::add_metadata("path", "config.toml"));
    rust_logger_facade::error!(traced, "Configuration unavailable", setter::error(err));
    errorf!(traced, "Exit code would be {}", 2);

    println!("\n4. Installing a custom logger:");
    registry::register(std::sync::Arc::new(logger));
    registry::get().info("Now routed through the registered logger", &[]);
    if let Some(active) = registry::global().try_get() {
        active.warn("Still the same logger", &[]);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
