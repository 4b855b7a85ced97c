//! Logger contract

use super::{field_value::FieldValue, log_level::LogLevel, options::Options, setter::Setter};
use std::sync::Arc;

/// Operations every logger implementation provides.
///
/// Implementors supply [`Logger::log`], [`Logger::enabled`] and
/// [`Logger::new_child`]; the per-level methods are derived from them.
///
/// `fatal` is only the most urgent label. It never exits the process and
/// never panics.
pub trait Logger: Send + Sync {
    /// Emit a record if `level` passes the logger's threshold
    fn log(&self, level: LogLevel, message: &str, options: Options);

    /// Whether a record at `level` would be emitted
    fn enabled(&self, level: LogLevel) -> bool;

    /// Derive a logger that keeps this logger's threshold and output binding.
    ///
    /// Namespace and context setters override the inherited values; a child
    /// built with a request context tags every record it emits.
    fn new_child(&self, setters: &[Setter]) -> Arc<dyn Logger>;

    #[inline]
    fn fatal(&self, message: &str, setters: &[Setter]) {
        self.log(LogLevel::Fatal, message, Options::evaluate(setters));
    }

    #[inline]
    fn fatalf(&self, format: &str, args: &[FieldValue]) {
        self.log(LogLevel::Fatal, format, Options::with_format_args(args.to_vec()));
    }

    #[inline]
    fn error(&self, message: &str, setters: &[Setter]) {
        self.log(LogLevel::Error, message, Options::evaluate(setters));
    }

    #[inline]
    fn errorf(&self, format: &str, args: &[FieldValue]) {
        self.log(LogLevel::Error, format, Options::with_format_args(args.to_vec()));
    }

    #[inline]
    fn warn(&self, message: &str, setters: &[Setter]) {
        self.log(LogLevel::Warn, message, Options::evaluate(setters));
    }

    #[inline]
    fn warnf(&self, format: &str, args: &[FieldValue]) {
        self.log(LogLevel::Warn, format, Options::with_format_args(args.to_vec()));
    }

    #[inline]
    fn info(&self, message: &str, setters: &[Setter]) {
        self.log(LogLevel::Info, message, Options::evaluate(setters));
    }

    #[inline]
    fn infof(&self, format: &str, args: &[FieldValue]) {
        self.log(LogLevel::Info, format, Options::with_format_args(args.to_vec()));
    }

    #[inline]
    fn debug(&self, message: &str, setters: &[Setter]) {
        self.log(LogLevel::Debug, message, Options::evaluate(setters));
    }

    #[inline]
    fn debugf(&self, format: &str, args: &[FieldValue]) {
        self.log(LogLevel::Debug, format, Options::with_format_args(args.to_vec()));
    }

    #[inline]
    fn trace(&self, message: &str, setters: &[Setter]) {
        self.log(LogLevel::Trace, message, Options::evaluate(setters));
    }

    #[inline]
    fn tracef(&self, format: &str, args: &[FieldValue]) {
        self.log(LogLevel::Trace, format, Options::with_format_args(args.to_vec()));
    }
}
