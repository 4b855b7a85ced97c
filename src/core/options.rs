//! Per-call option bag
//!
//! An [`Options`] value is built fresh for every logging call: it starts from
//! [`Options::new`], the caller's [`Setter`]s are applied in order, and the
//! result is handed read-only to the printer.

use super::field_value::{FieldValue, Metadata, SharedError};
use super::log_level::LogLevel;
use super::request_context::RequestContext;
use super::setter::Setter;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;

pub use super::request_context::REQUEST_ID_KEY;

/// Key of the attached error value
pub const ERROR_KEY: &str = "error";
/// Key of the namespace override
pub const NAMESPACE_KEY: &str = "namespace";
/// Key of the ambient context in structured output
pub const CONTEXT_KEY: &str = "context";

/// Keys with a fixed meaning in the option bag.
pub const RESERVED_KEYS: [&str; 4] = [ERROR_KEY, NAMESPACE_KEY, CONTEXT_KEY, REQUEST_ID_KEY];

pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Source location of a logging call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Placeholder used when the call site could not be resolved
    pub const fn unknown() -> Self {
        Self {
            file: "<???>",
            line: 0,
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Ad hoc named values: error, namespace override and extensions
    pub values: HashMap<String, FieldValue>,
    /// Structured annotations, a namespace independent from `values`
    pub metadata: Option<Metadata>,
    /// Positional arguments substituted into the message template
    pub fmt_args: Vec<FieldValue>,
    pub context: Option<RequestContext>,
    /// Threshold override, only consulted when building a child logger
    pub level: Option<LogLevel>,
    pub location: Option<CallSite>,
}

impl Options {
    /// Empty option bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Option bag for the "template + positional arguments" call shape
    pub fn with_format_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = FieldValue>,
    {
        Self {
            fmt_args: args.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Apply `setters` in order on top of [`Options::new`].
    ///
    /// Later setters win when they touch the same field; setters that add a
    /// single metadata key keep whatever was added before them.
    pub fn evaluate(setters: &[Setter]) -> Self {
        let mut options = Self::new();
        for setter in setters {
            setter.apply(&mut options);
        }
        options
    }

    /// Store an ad hoc value
    pub fn insert_value(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    // Typed accessors only match the exact stored variant, nothing is converted.

    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.values.get(key)? {
            FieldValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get_int(&self, key: &str) -> Option<isize> {
        match self.values.get(key)? {
            FieldValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn get_int64(&self, key: &str) -> Option<i64> {
        match self.values.get(key)? {
            FieldValue::Int64(i) => Some(*i),
            _ => None,
        }
    }

    pub fn get_time(&self, key: &str) -> Option<DateTime<Utc>> {
        match self.values.get(key)? {
            FieldValue::Time(t) => Some(*t),
            _ => None,
        }
    }

    pub fn get_error(&self, key: &str) -> Option<&SharedError> {
        match self.values.get(key)? {
            FieldValue::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Error attached with [`setter::error`](super::setter::error)
    pub fn error(&self) -> Option<&SharedError> {
        self.get_error(ERROR_KEY)
    }

    /// Namespace override, `None` when unset or empty
    pub fn namespace(&self) -> Option<&str> {
        self.get_string(NAMESPACE_KEY).filter(|n| !n.is_empty())
    }

    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    pub fn context(&self) -> Option<&RequestContext> {
        self.context.as_ref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.context.as_ref().and_then(RequestContext::request_id)
    }

    pub fn fmt_args(&self) -> &[FieldValue] {
        &self.fmt_args
    }

    /// Metadata, `None` when unset or empty
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref().filter(|m| !m.is_empty())
    }

    /// Values stored under keys that are not reserved
    pub fn extra_values(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.values.iter().filter(|(k, _)| !is_reserved_key(k))
    }
}
