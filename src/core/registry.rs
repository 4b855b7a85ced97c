//! Process-wide logger registry
//!
//! A [`Registry`] holds at most one active logger. The first [`Registry::get`]
//! on an empty registry builds a [`StandardLogger`] from configuration, installs
//! it and announces itself with a debug record. [`Registry::clear`] empties the
//! registry again so the next `get` rebuilds the default.
//!
//! Registries are ordinary values, so tests build isolated ones. The
//! process-wide instance is reached through [`global`] and the free functions
//! of this module.
//!
//! ```
//! use rust_logger_facade::prelude::*;
//! use rust_logger_facade::Registry;
//! use std::sync::Arc;
//!
//! let registry = Registry::with_config_source(|key| match key {
//!     "LOG_LEVEL" => Some("warn".to_string()),
//!     _ => None,
//! })
//! .with_default_printer(|| Arc::new(StdPrinter::new(BufferSink::new())));
//!
//! let logger = registry.get();
//! assert!(logger.enabled(LogLevel::Warn));
//! assert!(!logger.enabled(LogLevel::Info));
//! ```

use super::{
    config::LoggerConfig, logger::Logger, printer::Printer, setter::Setter,
    standard_logger::StandardLogger,
};
use crate::printers::StdPrinter;
use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Self-announcement emitted through a lazily built default logger
pub const DEFAULT_LOGGER_NOTICE: &str = "No logger found. StdLogger initiated";

type ConfigSource = Box<dyn Fn() -> LoggerConfig + Send + Sync>;
type PrinterFactory = Box<dyn Fn() -> Arc<dyn Printer> + Send + Sync>;

pub struct Registry {
    active: Mutex<Option<Arc<dyn Logger>>>,
    config_source: ConfigSource,
    printer_factory: PrinterFactory,
}

impl Registry {
    /// Empty registry whose default logger reads the process environment and
    /// prints to stdout
    pub fn new() -> Self {
        Self {
            active: Mutex::new(None),
            config_source: Box::new(LoggerConfig::from_env),
            printer_factory: Box::new(|| Arc::new(StdPrinter::stdout())),
        }
    }

    /// Empty registry whose default logger is configured through `lookup`
    /// instead of the process environment
    pub fn with_config_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            config_source: Box::new(move || LoggerConfig::from_lookup(&lookup)),
            ..Self::new()
        }
    }

    /// Printer bound to each default logger this registry builds
    #[must_use]
    pub fn with_default_printer<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn Printer> + Send + Sync + 'static,
    {
        self.printer_factory = Box::new(factory);
        self
    }

    /// Active logger, building and installing the default one if none is set.
    ///
    /// The check, construction and install happen under one lock, so callers
    /// racing on an empty registry all receive the same instance.
    pub fn get(&self) -> Arc<dyn Logger> {
        let (logger, created) = {
            let mut active = self.active.lock();
            match active.as_ref() {
                Some(logger) => (Arc::clone(logger), false),
                None => {
                    let logger = self.build_default();
                    *active = Some(Arc::clone(&logger));
                    (logger, true)
                }
            }
        };

        if created {
            logger.debug(DEFAULT_LOGGER_NOTICE, &[]);
        }
        logger
    }

    /// Active logger without triggering default construction
    pub fn try_get(&self) -> Option<Arc<dyn Logger>> {
        self.active.lock().clone()
    }

    pub fn is_registered(&self) -> bool {
        self.active.lock().is_some()
    }

    /// Install `logger` as the active logger, replacing any previous one
    pub fn register(&self, logger: Arc<dyn Logger>) {
        *self.active.lock() = Some(logger);
    }

    /// Install a logger that may be absent.
    ///
    /// # Panics
    ///
    /// Panics when `logger` is `None`. Continuing without a logger would drop
    /// every later record silently.
    pub fn register_opt(&self, logger: Option<Arc<dyn Logger>>) {
        match logger {
            Some(logger) => self.register(logger),
            None => panic!(
                "{}: logger to be registered is absent",
                env!("CARGO_PKG_NAME")
            ),
        }
    }

    /// Remove the active logger; the next `get` rebuilds the default
    pub fn clear(&self) {
        self.active.lock().take();
    }

    /// Child of the active logger
    pub fn new_child(&self, setters: &[Setter]) -> Arc<dyn Logger> {
        self.get().new_child(setters)
    }

    fn build_default(&self) -> Arc<dyn Logger> {
        let config = (self.config_source)();
        Arc::new(StandardLogger::with_printer(
            config.level,
            config.namespace,
            (self.printer_factory)(),
        ))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("registered", &self.is_registered())
            .finish()
    }
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(Registry::new)
}

/// Active process-wide logger
pub fn get() -> Arc<dyn Logger> {
    global().get()
}

pub fn register(logger: Arc<dyn Logger>) {
    global().register(logger);
}

/// Process-wide counterpart of [`Registry::register_opt`]
///
/// # Panics
///
/// Panics when `logger` is `None`.
pub fn register_opt(logger: Option<Arc<dyn Logger>>) {
    global().register_opt(logger);
}

pub fn clear() {
    global().clear();
}

pub fn new_child(setters: &[Setter]) -> Arc<dyn Logger> {
    global().new_child(setters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{setter, LogLevel};
    use crate::printers::BufferSink;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;

    fn captured(level: &'static str) -> (Registry, BufferSink) {
        let sink = BufferSink::new();
        let printer_sink = sink.clone();
        let registry = Registry::with_config_source(move |key| match key {
            "LOG_LEVEL" => Some(level.to_string()),
            "LOG_NAMESPACE" => Some("boot".to_string()),
            _ => None,
        })
        .with_default_printer(move || {
            Arc::new(StdPrinter::new(printer_sink.clone()).without_timestamp())
        });
        (registry, sink)
    }

    #[test]
    fn test_lazy_default_announces_itself() {
        let (registry, sink) = captured("debug");
        assert!(!registry.is_registered());

        let logger = registry.get();
        assert!(registry.is_registered());
        assert!(logger.enabled(LogLevel::Debug));
        assert_eq!(
            sink.contents(),
            "[DEBUG] (boot) No logger found. StdLogger initiated\n"
        );

        registry.get();
        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn test_announcement_suppressed_by_default_level() {
        let (registry, sink) = captured("not-a-level");
        let logger = registry.get();
        assert!(logger.enabled(LogLevel::Error));
        assert!(!logger.enabled(LogLevel::Warn));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_register_replaces_active() {
        let (registry, sink) = captured("info");
        let replacement: Arc<dyn Logger> = Arc::new(StandardLogger::with_printer(
            LogLevel::Trace,
            "custom",
            Arc::new(StdPrinter::new(sink.clone()).without_timestamp()),
        ));
        registry.register(Arc::clone(&replacement));

        assert!(Arc::ptr_eq(&registry.get(), &replacement));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_clear_forces_rebuild() {
        let (registry, sink) = captured("debug");
        let first = registry.get();
        registry.clear();
        assert!(registry.try_get().is_none());

        let second = registry.get();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(sink.lines().len(), 2);
    }

    #[test]
    fn test_new_child_delegates_to_active() {
        let (registry, sink) = captured("info");
        let child = registry.new_child(&[setter::request_id("abc-123")]);
        child.info("hi", &[]);
        assert_eq!(
            sink.lines(),
            vec![" [INFO] (boot) hi", "  > Request ID: abc-123"]
        );
    }

    #[test]
    #[should_panic(expected = "logger to be registered is absent")]
    fn test_register_absent_panics() {
        Registry::new().register_opt(None);
    }

    #[test]
    #[should_panic(expected = "logger to be registered is absent")]
    fn test_global_register_absent_panics() {
        register_opt(None);
    }

    #[test]
    fn test_concurrent_first_access_installs_one_logger() {
        let builds = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&builds);
        let registry = Arc::new(
            Registry::with_config_source(move |key| {
                if key == "LOG_LEVEL" {
                    counter.fetch_add(1, Ordering::SeqCst);
                }
                None
            })
            .with_default_printer(|| Arc::new(StdPrinter::new(BufferSink::new()))),
        );

        let threads = 16;
        let barrier = Arc::new(Barrier::new(threads));
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    registry.get()
                })
            })
            .collect();

        let loggers: Vec<Arc<dyn Logger>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        for logger in &loggers[1..] {
            assert!(Arc::ptr_eq(&loggers[0], logger));
        }
    }
}
