//! Printer trait for rendering evaluated records

use super::{error::Result, log_level::LogLevel, options::Options};

/// Renders one evaluated record to an output sink.
///
/// Printers are shared between a logger and its children and may be called
/// from several threads at once, so they take `&self`.
pub trait Printer: Send + Sync {
    fn print(&self, level: LogLevel, message: &str, options: &Options) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "custom"
    }
}

/// Any matching closure is a printer.
impl<F> Printer for F
where
    F: Fn(LogLevel, &str, &Options) -> Result<()> + Send + Sync,
{
    fn print(&self, level: LogLevel, message: &str, options: &Options) -> Result<()> {
        self(level, message, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_closure_printer() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let printer = move |level: LogLevel, message: &str, _: &Options| -> Result<()> {
            sink.lock().push(format!("{}:{}", level, message));
            Ok(())
        };

        printer.print(LogLevel::Warn, "disk almost full", &Options::new()).unwrap();
        assert_eq!(printer.name(), "custom");
        assert_eq!(seen.lock().as_slice(), ["Warn:disk almost full"]);
    }
}
