//! # Rust Logger Facade
//!
//! A leveled logging facade: application code obtains a logger, emits records
//! tagged with a severity, and attaches structured context without depending on
//! a concrete output.
//!
//! ## Features
//!
//! - **Six levels**: Fatal, Error, Warn, Info, Debug and Trace with RFC-5424 ranks
//! - **Typed options**: errors, metadata, format arguments and request ids are
//!   attached through composable setters
//! - **Child loggers**: derive loggers with their own namespace or request context
//! - **Pluggable printers**: text, JSON lines, or any closure
//! - **Process-wide registry**: lazily built default logger configured from the
//!   environment
//!
//! ## Example
//!
//! ```
//! use rust_logger_facade::prelude::*;
//!
//! let sink = BufferSink::new();
//! let logger = StandardLogger::builder()
//!     .level(LogLevel::Info)
//!     .namespace("billing")
//!     .printer(StdPrinter::new(sink.clone()).without_timestamp())
//!     .build();
//!
//! let request = logger.child(&[setter::request_id("abc-123")]);
//! request.warn("charge retried", &[setter::add_metadata("attempt", 2_i64)]);
//!
//! assert_eq!(
//!     sink.lines(),
//!     vec![
//!         " [WARN] (billing) charge retried",
//!         "  > Request ID: abc-123",
//!         "  > Metadata: {\"attempt\":2}",
//!     ]
//! );
//! ```

pub mod core;
pub mod macros;
pub mod printers;

pub use crate::core::registry;
pub use crate::core::setter;

pub mod prelude {
    pub use crate::core::setter;
    pub use crate::core::{
        FieldValue, LogLevel, Logger, LoggerError, Options, Printer, RequestContext, Result,
        Setter, StandardLogger, TimestampFormat,
    };
    pub use crate::printers::{BufferSink, JsonPrinter, StdPrinter};
}

pub use crate::core::{
    get_request_id, level_name, set_request_id, CallSite, FieldValue, LogLevel, Logger,
    LoggerConfig, LoggerError, LoggerStats, Metadata, Options, Printer, Registry,
    RequestContext, Result, Setter, SharedError, StandardLogger, StandardLoggerBuilder,
    TimestampFormat, REQUEST_ID_KEY,
};
pub use printers::{BufferSink, JsonPrinter, StdPrinter};
