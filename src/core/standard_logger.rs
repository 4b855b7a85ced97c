//! Default logger implementation

use super::{
    config::LoggerConfig,
    error::Result,
    log_level::LogLevel,
    logger::Logger,
    options::{Options, NAMESPACE_KEY},
    printer::Printer,
    request_context::RequestContext,
    setter::Setter,
    stats::LoggerStats,
};
use crate::printers::StdPrinter;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// Gates records by threshold, injects the logger's namespace and context, and
/// hands the result to its printer.
///
/// Every call runs synchronously on the caller's thread.
pub struct StandardLogger {
    level: LogLevel,
    namespace: String,
    context: Option<RequestContext>,
    printer: Arc<dyn Printer>,
    stats: LoggerStats,
}

impl StandardLogger {
    /// Logger printing to stdout with the standard text layout
    #[must_use]
    pub fn new(level: LogLevel, namespace: impl Into<String>) -> Self {
        Self::with_printer(level, namespace, Arc::new(StdPrinter::stdout()))
    }

    #[must_use]
    pub fn with_printer(
        level: LogLevel,
        namespace: impl Into<String>,
        printer: Arc<dyn Printer>,
    ) -> Self {
        Self {
            level,
            namespace: namespace.into(),
            context: None,
            printer,
            stats: LoggerStats::new(),
        }
    }

    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(config.level, config.namespace.clone())
    }

    /// Create a builder for StandardLogger
    ///
    /// # Example
    /// ```
    /// use rust_logger_facade::prelude::*;
    ///
    /// let logger = StandardLogger::builder()
    ///     .level(LogLevel::Debug)
    ///     .namespace("worker")
    ///     .printer(StdPrinter::stderr())
    ///     .build();
    /// assert_eq!(logger.namespace(), "worker");
    /// ```
    #[must_use]
    pub fn builder() -> StandardLoggerBuilder {
        StandardLoggerBuilder::new()
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn context(&self) -> Option<&RequestContext> {
        self.context.as_ref()
    }

    pub fn printer(&self) -> &Arc<dyn Printer> {
        &self.printer
    }

    /// Counters for this instance; children keep their own
    pub fn stats(&self) -> &LoggerStats {
        &self.stats
    }

    pub fn flush(&self) -> Result<()> {
        self.printer.flush()
    }

    /// Concrete form of [`Logger::new_child`]
    #[must_use]
    pub fn child(&self, setters: &[Setter]) -> StandardLogger {
        let options = Options::evaluate(setters);

        let namespace = options
            .namespace()
            .map(str::to_string)
            .unwrap_or_else(|| self.namespace.clone());
        let context = options.context.clone().or_else(|| self.context.clone());
        let level = options.level.unwrap_or(self.level);

        StandardLogger {
            level,
            namespace,
            context,
            printer: Arc::clone(&self.printer),
            stats: LoggerStats::new(),
        }
    }

    fn print(&self, level: LogLevel, message: &str, mut options: Options) {
        if !self.level.allows(level) {
            self.stats.record_suppressed();
            return;
        }

        if let Some(ref ctx) = self.context {
            if !options.has_context() {
                options.context = Some(ctx.clone());
            }
        }

        if !self.namespace.is_empty() && options.namespace().is_none() {
            options.insert_value(NAMESPACE_KEY, self.namespace.as_str());
        }

        match self.printer.print(level, message, &options) {
            Ok(()) => {
                self.stats.record_emitted();
            }
            Err(e) => {
                self.stats.record_failed();
                eprintln!(
                    "[LOGGER ERROR] Printer '{}' failed: {}",
                    self.printer.name(),
                    e
                );
            }
        }
    }
}

impl Logger for StandardLogger {
    fn log(&self, level: LogLevel, message: &str, options: Options) {
        self.print(level, message, options);
    }

    fn enabled(&self, level: LogLevel) -> bool {
        self.level.allows(level)
    }

    fn new_child(&self, setters: &[Setter]) -> Arc<dyn Logger> {
        Arc::new(self.child(setters))
    }
}

impl fmt::Debug for StandardLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StandardLogger")
            .field("level", &self.level)
            .field("namespace", &self.namespace)
            .field("context", &self.context)
            .field("printer", &self.printer.name())
            .finish()
    }
}

/// Builder for constructing StandardLogger with a fluent API
pub struct StandardLoggerBuilder {
    level: LogLevel,
    namespace: String,
    context: Option<RequestContext>,
    printer: Option<Arc<dyn Printer>>,
}

impl StandardLoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: LogLevel::DEFAULT,
            namespace: String::new(),
            context: None,
            printer: None,
        }
    }

    /// Set the threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Context injected into every record that does not carry its own
    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: RequestContext) -> Self {
        self.context = Some(context);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn printer<P: Printer + 'static>(mut self, printer: P) -> Self {
        self.printer = Some(Arc::new(printer));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_printer(mut self, printer: Arc<dyn Printer>) -> Self {
        self.printer = Some(printer);
        self
    }

    /// Print with the standard text layout into `writer`
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(self, writer: W) -> Self {
        self.printer(StdPrinter::new(writer))
    }

    /// Build the logger; without a printer it writes to stdout
    pub fn build(self) -> StandardLogger {
        let printer = self
            .printer
            .unwrap_or_else(|| Arc::new(StdPrinter::stdout()));
        let mut logger = StandardLogger::with_printer(self.level, self.namespace, printer);
        logger.context = self.context;
        logger
    }
}

impl Default for StandardLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
