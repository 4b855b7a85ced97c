//! Composable option setters
//!
//! Each function returns a [`Setter`] that mutates one field of an
//! [`Options`] bag. A slice of setters is applied left to right by
//! [`Options::evaluate`].
//!
//! ```
//! use rust_logger_facade::{setter, Options};
//!
//! let options = Options::evaluate(&[
//!     setter::namespace("billing"),
//!     setter::add_metadata("invoice", 1042_i64),
//!     setter::add_metadata("currency", "EUR"),
//! ]);
//! assert_eq!(options.namespace(), Some("billing"));
//! assert_eq!(options.metadata().map(|m| m.len()), Some(2));
//! ```

use super::field_value::{FieldValue, Metadata, SharedError};
use super::log_level::LogLevel;
use super::options::{CallSite, Options, ERROR_KEY, NAMESPACE_KEY};
use super::request_context::RequestContext;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// One order-sensitive mutation of an [`Options`] bag
#[derive(Clone)]
pub struct Setter(Arc<dyn Fn(&mut Options) + Send + Sync>);

impl Setter {
    /// Wrap a custom mutation
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Options) + Send + Sync + 'static,
    {
        Setter(Arc::new(f))
    }

    #[inline]
    pub fn apply(&self, options: &mut Options) {
        (self.0)(options)
    }
}

impl fmt::Debug for Setter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Setter(..)")
    }
}

/// Attach an error value
pub fn error<E>(err: E) -> Setter
where
    E: StdError + Send + Sync + 'static,
{
    shared_error(Arc::new(err))
}

/// Attach an error that is already shared
pub fn shared_error(err: SharedError) -> Setter {
    Setter::new(move |o| {
        o.values
            .insert(ERROR_KEY.to_string(), FieldValue::Error(Arc::clone(&err)));
    })
}

/// Replace the whole metadata mapping
pub fn metadata(m: Metadata) -> Setter {
    Setter::new(move |o| o.metadata = Some(m.clone()))
}

/// Add one metadata entry, creating the mapping on first use
pub fn add_metadata(key: impl Into<String>, value: impl Into<FieldValue>) -> Setter {
    let key = key.into();
    let value = value.into();
    Setter::new(move |o| {
        o.metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.clone(), value.clone());
    })
}

/// Set positional format arguments
pub fn format<I>(args: I) -> Setter
where
    I: IntoIterator,
    I::Item: Into<FieldValue>,
{
    let args: Vec<FieldValue> = args.into_iter().map(Into::into).collect();
    Setter::new(move |o| o.fmt_args = args.clone())
}

/// Override the namespace
pub fn namespace(n: impl Into<String>) -> Setter {
    let n = n.into();
    Setter::new(move |o| {
        o.values
            .insert(NAMESPACE_KEY.to_string(), FieldValue::String(n.clone()));
    })
}

/// Attach an ambient context
pub fn context(ctx: RequestContext) -> Setter {
    Setter::new(move |o| o.context = Some(ctx.clone()))
}

/// Attach a context carrying only `request_id`
pub fn request_id(request_id: impl Into<String>) -> Setter {
    context(RequestContext::with_request_id(request_id))
}

/// Threshold for a child logger
pub fn level(level: LogLevel) -> Setter {
    Setter::new(move |o| o.level = Some(level))
}

/// Store an ad hoc value under `key`
pub fn value(key: impl Into<String>, value: impl Into<FieldValue>) -> Setter {
    let key = key.into();
    let value = value.into();
    Setter::new(move |o| {
        o.values.insert(key.clone(), value.clone());
    })
}

/// Record the call site; the crate macros add this automatically
pub fn location(file: &'static str, line: u32) -> Setter {
    Setter::new(move |o| o.location = Some(CallSite::new(file, line)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setter_is_reusable() {
        let s = add_metadata("k", "v");
        let a = Options::evaluate(std::slice::from_ref(&s));
        let b = Options::evaluate(&[s]);
        assert_eq!(a.metadata().map(|m| m.len()), Some(1));
        assert_eq!(b.metadata().map(|m| m.len()), Some(1));
    }

    #[test]
    fn test_format_setter() {
        let o = Options::evaluate(&[format(["arg1", "arg2"])]);
        assert_eq!(o.fmt_args().len(), 2);

        let o = Options::evaluate(&[format(["x"]), format(Vec::<FieldValue>::new())]);
        assert!(o.fmt_args().is_empty());
    }

    #[test]
    fn test_request_id_setter() {
        let o = Options::evaluate(&[request_id("abc-123")]);
        assert_eq!(o.request_id(), Some("abc-123"));
    }

    #[test]
    fn test_level_and_location_setters() {
        let o = Options::evaluate(&[level(LogLevel::Trace), location("lib.rs", 7)]);
        assert_eq!(o.level, Some(LogLevel::Trace));
        assert_eq!(o.location, Some(CallSite::new("lib.rs", 7)));
    }

    #[test]
    fn test_custom_setter() {
        let s = Setter::new(|o: &mut Options| o.insert_value("tenant", "acme"));
        let o = Options::evaluate(&[s]);
        assert_eq!(o.get_string("tenant"), Some("acme"));
    }
}
