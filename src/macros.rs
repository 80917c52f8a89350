//! Logging macros for ergonomic record construction and dispatch.
//!
//! Formatting goes through `format_args!`, so templates are checked at
//! compile time. The record's `action` names the function the macro is
//! expanded in.
//!
//! # Examples
//!
//! ```
//! use rust_semantic_logger::prelude::*;
//! use rust_semantic_logger::{info, warn};
//!
//! let dispatcher = MultiSink::builder().sink(NullSink::new()).build();
//!
//! info!(dispatcher, "Server started");
//!
//! let port = 8080;
//! info!(dispatcher, "Server listening on port {}", port);
//! warn!(dispatcher, "Retry attempt {} of {}", 3, 5);
//! ```

/// Build a [`LogRecord`](crate::LogRecord) without dispatching it.
///
/// ```
/// use rust_semantic_logger::{record, LogLevel};
///
/// let record = record!(LogLevel::Debug, "{} rows", 10);
/// assert_eq!(record.message, "10 rows");
/// ```
#[macro_export]
macro_rules! record {
    ($level:expr, $($arg:tt)+) => {
        $crate::LogRecord::from_args($level, format_args!($($arg)+))
    };
}

/// Build a record and dispatch it at the given level.
///
/// ```
/// # use rust_semantic_logger::prelude::*;
/// # let dispatcher = MultiSink::new();
/// use rust_semantic_logger::log;
/// log!(dispatcher, LogLevel::Info, "Simple message");
/// log!(dispatcher, LogLevel::Custom(12), "Audit code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($dispatcher:expr, $level:expr, $($arg:tt)+) => {{
        let level = $level;
        let record = $crate::record!(level, $($arg)+);
        let message = record.message.clone();
        $dispatcher.log(level, &message, record)
    }};
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($dispatcher:expr, $($arg:tt)+) => {
        $crate::log!($dispatcher, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($dispatcher:expr, $($arg:tt)+) => {
        $crate::log!($dispatcher, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($dispatcher:expr, $($arg:tt)+) => {
        $crate::log!($dispatcher, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($dispatcher:expr, $($arg:tt)+) => {
        $crate::log!($dispatcher, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($dispatcher:expr, $($arg:tt)+) => {
        $crate::log!($dispatcher, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message on every sink, then terminate.
///
/// ```
/// # use rust_semantic_logger::prelude::*;
/// # let dispatcher = MultiSink::new();
/// use rust_semantic_logger::fatal;
/// let result: std::result::Result<(), _> = catch_fatal(|| {
///     fatal!(dispatcher, "Unable to recover from error: {}", "disk full");
/// });
/// assert!(result.is_err());
/// ```
#[macro_export]
macro_rules! fatal {
    ($dispatcher:expr, $($arg:tt)+) => {{
        let record = $crate::record!($crate::LogLevel::Fatal, $($arg)+);
        let message = record.message.clone();
        $dispatcher.fatal($crate::LogLevel::Fatal, &message, record)
    }};
}
