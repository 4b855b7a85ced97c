//! Log level definitions
//!
//! Ranks follow the RFC 5424 numbering. The gaps (0 panic, 2 critical, 5 notice)
//! are reserved codes the facade does not expose as separate levels, and a
//! *smaller* rank means a *more urgent* record.

use super::error::LoggerError;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(i8)]
pub enum LogLevel {
    Fatal = 1,
    Error = 3,
    Warn = 4,
    Info = 6,
    Debug = 7,
    Trace = 8,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::DEFAULT
    }
}

/// Name returned for ranks outside the level table.
pub const UNKNOWN_LEVEL_NAME: &str = "Unknown";

impl LogLevel {
    /// Threshold used when configuration is absent or unparseable.
    pub const DEFAULT: LogLevel = LogLevel::Error;

    pub const ALL: [LogLevel; 6] = [
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// RFC 5424 rank of this level.
    #[inline]
    pub fn rank(self) -> i8 {
        self as i8
    }

    pub fn from_rank(rank: i8) -> Option<Self> {
        match rank {
            1 => Some(LogLevel::Fatal),
            3 => Some(LogLevel::Error),
            4 => Some(LogLevel::Warn),
            6 => Some(LogLevel::Info),
            7 => Some(LogLevel::Debug),
            8 => Some(LogLevel::Trace),
            _ => None,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "Fatal",
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Fixed-width bracketed label written in front of every text record
    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "[FATAL] ",
            LogLevel::Error => "[ERROR] ",
            LogLevel::Warn => " [WARN] ",
            LogLevel::Info => " [INFO] ",
            LogLevel::Debug => "[DEBUG] ",
            LogLevel::Trace => "[TRACE] ",
        }
    }

    /// Lenient parse used for environment configuration.
    ///
    /// Accepts level names and their RFC 5424 codes in any letter case. Any
    /// other input resolves to [`LogLevel::DEFAULT`]; this never fails.
    ///
    /// ```
    /// use rust_logger_facade::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("WARN"), LogLevel::Warn);
    /// assert_eq!(LogLevel::parse("7"), LogLevel::Debug);
    /// assert_eq!(LogLevel::parse("9"), LogLevel::DEFAULT);
    /// ```
    pub fn parse(text: &str) -> Self {
        Self::lookup(text).unwrap_or(Self::DEFAULT)
    }

    fn lookup(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "panic" | "0" | "fatal" | "1" => Some(LogLevel::Fatal),
            "error" | "3" => Some(LogLevel::Error),
            "warn" | "warning" | "4" => Some(LogLevel::Warn),
            "info" | "6" => Some(LogLevel::Info),
            "debug" | "7" => Some(LogLevel::Debug),
            "trace" | "8" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    /// Whether a logger with `self` as threshold emits a record at `record`.
    ///
    /// A record passes when it is at least as urgent as the threshold, i.e. its
    /// rank is less than or equal to the threshold rank.
    #[inline]
    pub fn allows(self, record: LogLevel) -> bool {
        record <= self
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Fatal => BrightRed,
            LogLevel::Error => Red,
            LogLevel::Warn => Yellow,
            LogLevel::Info => Green,
            LogLevel::Debug => Blue,
            LogLevel::Trace => BrightBlack,
        }
    }
}

/// Printable name for a raw rank, `"Unknown"` when the rank is not a level.
pub fn level_name(rank: i8) -> &'static str {
    LogLevel::from_rank(rank)
        .map(|level| level.to_str())
        .unwrap_or(UNKNOWN_LEVEL_NAME)
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Strict counterpart of [`LogLevel::parse`] for callers that want to reject
/// unknown tokens instead of falling back to the default.
impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| LoggerError::invalid_level(s))
    }
}

/// Accepts the same tokens as [`LogLevel::parse`], as strings or integers.
/// Unknown tokens resolve to [`LogLevel::DEFAULT`] instead of failing.
impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LevelVisitor;

        impl<'de> Visitor<'de> for LevelVisitor {
            type Value = LogLevel;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a level name or RFC 5424 code")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<LogLevel, E> {
                Ok(LogLevel::parse(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<LogLevel, E> {
                Ok(LogLevel::parse(&v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<LogLevel, E> {
                Ok(LogLevel::parse(&v.to_string()))
            }
        }

        deserializer.deserialize_any(LevelVisitor)
    }
}

impl From<LogLevel> for i8 {
    fn from(level: LogLevel) -> Self {
        level.rank()
    }
}
