//! Line-oriented text printer
//!
//! Layout of one record:
//!
//! ```text
//! 2025/01/08 10:30:45 [ERROR] (billing) charge failed: card 4242
//!   > Request ID: abc-123
//!   > Error: connection reset
//!   > Metadata: {"attempt":3}
//! ```
//!
//! The timestamp is optional, the namespace appears only when set, and each
//! continuation line is written only when its value is present.

use crate::core::template;
use crate::core::{CallSite, LogLevel, LoggerError, Options, Printer, Result, TimestampFormat};
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::error::Error as _;
use std::fmt::Write as _;
use std::io::{self, Write};

#[cfg(feature = "console")]
use colored::Colorize;

pub struct StdPrinter {
    writer: Mutex<Box<dyn Write + Send>>,
    timestamp_format: Option<TimestampFormat>,
    use_colors: bool,
    error_trace: bool,
}

impl StdPrinter {
    /// Printer writing to any byte sink
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            timestamp_format: Some(TimestampFormat::default()),
            use_colors: false,
            error_trace: false,
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Set the timestamp format for this printer
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_logger_facade::{StdPrinter, TimestampFormat};
    ///
    /// let printer = StdPrinter::stderr().with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    /// Set a custom timestamp format using a strftime-compatible format string
    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = Some(TimestampFormat::Custom(format_str.to_string()));
        self
    }

    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp_format = None;
        self
    }

    /// Colour the level prefix with ANSI escapes
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Also print the call site and the error's cause for error records
    #[must_use]
    pub fn with_error_trace(mut self, enabled: bool) -> Self {
        self.error_trace = enabled;
        self
    }

    /// Render a record to the exact text this printer writes
    pub fn render(&self, level: LogLevel, message: &str, options: &Options) -> String {
        let mut out = String::with_capacity(64 + message.len());

        if let Some(ref format) = self.timestamp_format {
            out.push_str(&format.format(&Utc::now()));
            out.push(' ');
        }

        out.push_str(&self.level_prefix(level));

        if let Some(namespace) = options.namespace() {
            let _ = write!(out, "({}) ", namespace);
        }

        if options.fmt_args().is_empty() {
            out.push_str(message);
        } else {
            out.push_str(&template::render(message, options.fmt_args()));
        }
        out.push('\n');

        if let Some(request_id) = options.request_id() {
            let _ = writeln!(out, "  > Request ID: {}", request_id);
        }

        if let Some(err) = options.error() {
            if level <= LogLevel::Error {
                let _ = writeln!(out, "  > Error: {}", err);
                if self.error_trace {
                    let site = options.location.unwrap_or_else(CallSite::unknown);
                    let _ = writeln!(out, "  > Trace: {}", site);
                    if let Some(cause) = err.source() {
                        let _ = writeln!(out, "  > ErrorCause: {}", cause);
                    }
                }
            }
        }

        if let Some(metadata) = options.metadata() {
            // Sorted so the same metadata always prints the same way
            let sorted: BTreeMap<_, _> = metadata.iter().collect();
            if let Ok(json) = serde_json::to_string(&sorted) {
                let _ = writeln!(out, "  > Metadata: {}", json);
            }
        }

        out
    }

    fn level_prefix(&self, level: LogLevel) -> String {
        #[cfg(feature = "console")]
        if self.use_colors {
            return level.prefix().color(level.color_code()).to_string();
        }

        level.prefix().to_string()
    }
}

impl Printer for StdPrinter {
    fn print(&self, level: LogLevel, message: &str, options: &Options) -> Result<()> {
        let output = self.render(level, message, options);
        let mut writer = self.writer.lock();
        writer
            .write_all(output.as_bytes())
            .map_err(|e| LoggerError::io_operation("writing record", "std printer sink", e))
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "std"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{setter, FieldValue, Metadata};
    use crate::printers::BufferSink;
    use std::fmt;

    fn plain() -> StdPrinter {
        StdPrinter::new(BufferSink::new()).without_timestamp()
    }

    #[derive(Debug)]
    struct Wrapped {
        source: std::io::Error,
    }

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a fatal error occurred. {}", self.source)
        }
    }

    impl std::error::Error for Wrapped {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.source)
        }
    }

    #[test]
    fn test_message_only() {
        let out = plain().render(LogLevel::Warn, "disk at 91%", &Options::new());
        assert_eq!(out, " [WARN] disk at 91%\n");
    }

    #[test]
    fn test_namespace_suffix() {
        let options = Options::evaluate(&[setter::namespace("test")]);
        let out = plain().render(LogLevel::Fatal, "boom", &options);
        assert_eq!(out, "[FATAL] (test) boom\n");
    }

    #[test]
    fn test_format_args_substituted() {
        let options = Options::with_format_args(vec![
            FieldValue::from("arg1"),
            FieldValue::from("arg2"),
        ]);
        let out = plain().render(LogLevel::Info, "formatted: {} {}", &options);
        assert_eq!(out, " [INFO] formatted: arg1 arg2\n");
    }

    #[test]
    fn test_request_id_line() {
        let options = Options::evaluate(&[setter::request_id("abc-123")]);
        let out = plain().render(LogLevel::Debug, "handled", &options);
        assert_eq!(out, "[DEBUG] handled\n  > Request ID: abc-123\n");
    }

    #[test]
    fn test_error_only_for_error_or_above() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "this is error");
        let options = Options::evaluate(&[setter::error(err)]);

        let out = plain().render(LogLevel::Error, "failed", &options);
        assert_eq!(out, "[ERROR] failed\n  > Error: this is error\n");

        let out = plain().render(LogLevel::Debug, "failed", &options);
        assert_eq!(out, "[DEBUG] failed\n");
    }

    #[test]
    fn test_error_trace_and_cause() {
        let err = Wrapped {
            source: std::io::Error::new(std::io::ErrorKind::Other, "source of error"),
        };
        let options = Options::evaluate(&[setter::error(err), setter::location("src/jobs.rs", 42)]);
        let out = plain()
            .with_error_trace(true)
            .render(LogLevel::Fatal, "job crashed", &options);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "  > Error: a fatal error occurred. source of error");
        assert_eq!(lines[2], "  > Trace: src/jobs.rs:42");
        assert_eq!(lines[3], "  > ErrorCause: source of error");
    }

    #[test]
    fn test_error_trace_without_call_site() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "no site");
        let options = Options::evaluate(&[setter::error(err)]);
        let out = plain()
            .with_error_trace(true)
            .render(LogLevel::Error, "x", &options);
        assert!(out.contains("  > Trace: <???>:0\n"));
        assert!(!out.contains("ErrorCause"));
    }

    #[test]
    fn test_metadata_line_is_sorted_json() {
        let options = Options::evaluate(&[
            setter::add_metadata("key", "value"),
            setter::add_metadata("count", 2_i64),
        ]);
        let out = plain().render(LogLevel::Info, "with meta", &options);
        assert_eq!(
            out,
            " [INFO] with meta\n  > Metadata: {\"count\":2,\"key\":\"value\"}\n"
        );
    }

    #[test]
    fn test_metadata_line_omitted_on_serialization_failure() {
        let options = Options::evaluate(&[setter::add_metadata("ratio", f64::NAN)]);
        let out = plain().render(LogLevel::Info, "still printed", &options);
        assert_eq!(out, " [INFO] still printed\n");
    }

    #[test]
    fn test_empty_metadata_omitted() {
        let options = Options::evaluate(&[setter::metadata(Metadata::new())]);
        let out = plain().render(LogLevel::Info, "m", &options);
        assert_eq!(out, " [INFO] m\n");
    }

    #[test]
    fn test_timestamp_prefix() {
        let printer = StdPrinter::new(BufferSink::new()).with_custom_timestamp("%Y");
        let out = printer.render(LogLevel::Info, "x", &Options::new());
        let year = Utc::now().format("%Y").to_string();
        assert!(out.starts_with(&format!("{}  [INFO] x", year)), "{:?}", out);
    }

    #[test]
    fn test_print_writes_to_sink() {
        let sink = BufferSink::new();
        let printer = StdPrinter::new(sink.clone()).without_timestamp();
        printer.print(LogLevel::Error, "written", &Options::new()).unwrap();
        printer.flush().unwrap();
        assert_eq!(sink.contents(), "[ERROR] written\n");
        assert_eq!(printer.name(), "std");
    }

    #[test]
    fn test_print_reports_sink_failure() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let printer = StdPrinter::new(Closed).without_timestamp();
        let err = printer
            .print(LogLevel::Error, "lost", &Options::new())
            .unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }
}
