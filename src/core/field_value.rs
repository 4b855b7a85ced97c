//! Typed values carried by options, metadata and format arguments

use chrono::{DateTime, Utc};
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Error value shared between an option bag and the printer that renders it.
pub type SharedError = Arc<dyn StdError + Send + Sync + 'static>;

/// Structured annotations attached to a record.
pub type Metadata = HashMap<String, FieldValue>;

/// Value type for option, metadata and format-argument slots
///
/// `Int` and `Int64` are kept apart: the typed accessors on
/// [`Options`](super::Options) only return a value stored with the exact
/// variant they ask for. `Int` is built from `isize`, `i32`, `u32` and `usize`,
/// so an unsuffixed integer literal lands there. `Int64` is built from `i64`
/// only.
#[derive(Debug, Clone)]
pub enum FieldValue {
    String(String),
    Int(isize),
    Int64(i64),
    Float(f64),
    Bool(bool),
    Time(DateTime<Utc>),
    Error(SharedError),
    Json(serde_json::Value),
    Null,
}

impl FieldValue {
    /// Wrap any error so it can be stored in an option slot
    pub fn error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        FieldValue::Error(Arc::new(err))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::String(_) => "string",
            FieldValue::Int(_) => "int",
            FieldValue::Int64(_) => "int64",
            FieldValue::Float(_) => "float",
            FieldValue::Bool(_) => "bool",
            FieldValue::Time(_) => "time",
            FieldValue::Error(_) => "error",
            FieldValue::Json(_) => "json",
            FieldValue::Null => "null",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Convert to serde_json::Value for JSON serialization
    ///
    /// Non-finite floats have no JSON representation and become `null` here;
    /// the `Serialize` impl rejects them instead.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i as i64).into()),
            FieldValue::Int64(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Time(t) => serde_json::Value::String(t.to_rfc3339()),
            FieldValue::Error(e) => serde_json::Value::String(e.to_string()),
            FieldValue::Json(v) => v.clone(),
            FieldValue::Null => serde_json::Value::Null,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Int64(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Time(t) => write!(f, "{}", t.to_rfc3339()),
            FieldValue::Error(e) => write!(f, "{}", e),
            FieldValue::Json(v) => write!(f, "{}", v),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::String(s) => serializer.serialize_str(s),
            FieldValue::Int(i) => serializer.serialize_i64(*i as i64),
            FieldValue::Int64(i) => serializer.serialize_i64(*i),
            FieldValue::Float(f) if !f.is_finite() => Err(S::Error::custom(format!(
                "unsupported value: {} has no JSON representation",
                f
            ))),
            FieldValue::Float(f) => serializer.serialize_f64(*f),
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
            FieldValue::Time(t) => t.serialize(serializer),
            FieldValue::Error(e) => serializer.serialize_str(&e.to_string()),
            FieldValue::Json(v) => v.serialize(serializer),
            FieldValue::Null => serializer.serialize_unit(),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

impl From<isize> for FieldValue {
    fn from(i: isize) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int64(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as isize)
    }
}

/// Saturates at `isize::MAX` on targets where `u32` does not fit
impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(isize::try_from(i).unwrap_or(isize::MAX))
    }
}

/// Saturates at `isize::MAX`
impl From<usize> for FieldValue {
    fn from(i: usize) -> Self {
        FieldValue::Int(isize::try_from(i).unwrap_or(isize::MAX))
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(t: DateTime<Utc>) -> Self {
        FieldValue::Time(t)
    }
}

impl From<SharedError> for FieldValue {
    fn from(e: SharedError) -> Self {
        FieldValue::Error(e)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(v: serde_json::Value) -> Self {
        FieldValue::Json(v)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FieldValue::Null)
    }
}
