//! Printer implementations

pub mod buffer;
pub mod json;
pub mod std_printer;

pub use buffer::BufferSink;
pub use json::JsonPrinter;
pub use std_printer::StdPrinter;

pub use crate::core::Printer;
