//! JSON printer for structured logging

use crate::core::template;
use crate::core::{LogLevel, LoggerError, Options, Printer, Result, TimestampFormat, REQUEST_ID_KEY};
use chrono::Utc;
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::io::{self, Write};

/// Writes each record as a single-line JSON object (JSONL format)
///
/// Compatible with log aggregation tools like ELK, Loki, etc. Unlike the text
/// printer, an attached error is included at every level.
pub struct JsonPrinter {
    writer: Mutex<Box<dyn Write + Send>>,
    timestamp_format: TimestampFormat,
}

impl JsonPrinter {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            timestamp_format: TimestampFormat::Iso8601,
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Build the JSON object for one record
    pub fn to_value(&self, level: LogLevel, message: &str, options: &Options) -> Value {
        let mut obj = Map::new();

        obj.insert("timestamp".to_string(), self.timestamp_value());
        obj.insert("level".to_string(), Value::String(level.to_string()));

        if let Some(namespace) = options.namespace() {
            obj.insert("namespace".to_string(), Value::String(namespace.to_string()));
        }

        let message = if options.fmt_args().is_empty() {
            message.to_string()
        } else {
            template::render(message, options.fmt_args())
        };
        obj.insert("message".to_string(), Value::String(message));

        if let Some(request_id) = options.request_id() {
            obj.insert(REQUEST_ID_KEY.to_string(), Value::String(request_id.to_string()));
        }

        if let Some(err) = options.error() {
            obj.insert("error".to_string(), Value::String(err.to_string()));
        }

        if let Some(site) = options.location {
            obj.insert("file".to_string(), Value::String(site.file.to_string()));
            obj.insert("line".to_string(), Value::Number(site.line.into()));
        }

        let extras: Map<String, Value> = options
            .extra_values()
            .map(|(k, v)| (k.clone(), v.to_json_value()))
            .collect();
        if !extras.is_empty() {
            obj.insert("values".to_string(), Value::Object(extras));
        }

        // Metadata that fails to serialize is left out, the record still prints
        if let Some(metadata) = options.metadata() {
            if let Ok(value) = serde_json::to_value(metadata) {
                obj.insert("metadata".to_string(), value);
            }
        }

        Value::Object(obj)
    }

    fn timestamp_value(&self) -> Value {
        let now = Utc::now();
        match self.timestamp_format {
            TimestampFormat::Unix => Value::Number(now.timestamp().into()),
            TimestampFormat::UnixMillis => Value::Number(now.timestamp_millis().into()),
            _ => Value::String(self.timestamp_format.format(&now)),
        }
    }
}

impl Printer for JsonPrinter {
    fn print(&self, level: LogLevel, message: &str, options: &Options) -> Result<()> {
        let json = serde_json::to_string(&self.to_value(level, message, options))?;
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)
            .map_err(|e| LoggerError::io_operation("writing record", "json printer sink", e))
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }
}
