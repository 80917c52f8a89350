//! Core record model and sink contract

pub mod config;
pub mod error;
pub mod fatal;
pub mod format;
pub mod log_level;
pub mod log_record;
pub mod multi_sink;
pub mod output_format;
pub mod sink;
pub mod stack;
pub mod timestamp;

pub use config::{DiagnosticCallback, HostResolver, LoggerConfig, LoggerConfigBuilder};
pub use error::{LoggerError, Result};
pub use fatal::{catch_fatal, FatalError};
pub use format::safe_format;
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use multi_sink::{MultiSink, MultiSinkBuilder};
pub use output_format::OutputFormat;
pub use sink::{AsSink, BenchmarkOperation, Sink};
pub use stack::{capture_caller_name, capture_stack_trace, BacktraceWalker, NoopWalker, StackWalker};
pub use timestamp::TimestampFormat;
