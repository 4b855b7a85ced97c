//! Core logging functionality

pub mod config;
pub mod error;
pub mod field_value;
pub mod log_level;
pub mod logger;
pub mod options;
pub mod printer;
pub mod registry;
pub mod request_context;
pub mod setter;
pub mod standard_logger;
pub mod stats;
pub mod template;
pub mod timestamp;

pub use config::{LoggerConfig, ENV_LOG_LEVEL, ENV_LOG_NAMESPACE, ENV_LOG_PREFIX};
pub use error::{LoggerError, Result};
pub use field_value::{FieldValue, Metadata, SharedError};
pub use log_level::{level_name, LogLevel, UNKNOWN_LEVEL_NAME};
pub use logger::Logger;
pub use options::{
    is_reserved_key, CallSite, Options, CONTEXT_KEY, ERROR_KEY, NAMESPACE_KEY, RESERVED_KEYS,
};
pub use printer::Printer;
pub use registry::{Registry, DEFAULT_LOGGER_NOTICE};
pub use request_context::{get_request_id, set_request_id, RequestContext, REQUEST_ID_KEY};
pub use setter::Setter;
pub use standard_logger::{StandardLogger, StandardLoggerBuilder};
pub use stats::LoggerStats;
pub use timestamp::TimestampFormat;
