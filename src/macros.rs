//! Logging macros that record the call site.
//!
//! The plain macros take a message followed by setters; the `f`-suffixed
//! macros take a `{}` template followed by arguments convertible into
//! [`FieldValue`](crate::FieldValue). Both fill in the caller's file and line,
//! which printers show in their error trace output.
//!
//! # Examples
//!
//! ```
//! use rust_logger_facade::prelude::*;
//! use rust_logger_facade::{info, warnf};
//!
//! let sink = BufferSink::new();
//! let logger = StandardLogger::builder()
//!     .level(LogLevel::Info)
//!     .printer(StdPrinter::new(sink.clone()).without_timestamp())
//!     .build();
//!
//! info!(logger, "Server started");
//! info!(logger, "Request served", setter::request_id("abc-123"));
//! warnf!(logger, "Retry attempt {} of {}", 3, 5);
//!
//! assert_eq!(sink.lines()[3], " [WARN] Retry attempt 3 of 5");
//! ```

/// Log a message with setters at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_logger_facade::prelude::*;
/// # let logger = StandardLogger::builder().printer(StdPrinter::new(BufferSink::new())).build();
/// use rust_logger_facade::log;
/// log!(logger, LogLevel::Error, "Simple message");
/// log!(logger, LogLevel::Error, "With metadata", setter::add_metadata("code", 500_i64));
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $message:expr $(, $setter:expr)* $(,)?) => {{
        use $crate::Logger as _;
        $logger.log(
            $level,
            &$message,
            $crate::Options::evaluate(&[
                $crate::setter::location(file!(), line!())
                $(, $setter)*
            ]),
        )
    }};
}

/// Log a `{}` template with positional arguments at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_logger_facade::prelude::*;
/// # let logger = StandardLogger::builder().printer(StdPrinter::new(BufferSink::new())).build();
/// use rust_logger_facade::logf;
/// logf!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::Logger as _;
        let args: ::std::vec::Vec<$crate::FieldValue> =
            ::std::vec![$($crate::FieldValue::from($arg)),*];
        let mut options = $crate::Options::with_format_args(args);
        options.location = ::std::option::Option::Some($crate::CallSite::new(file!(), line!()));
        $logger.log($level, &$template, options)
    }};
}

/// Log a fatal-level message. Never exits the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_facade::prelude::*;
/// # let logger = StandardLogger::builder().printer(StdPrinter::new(BufferSink::new())).build();
/// use rust_logger_facade::error;
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "connection refused");
/// error!(logger, "Failed to connect to database", setter::error(err));
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! tracef {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}
