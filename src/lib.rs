//! # Rust Semantic Logger
//!
//! A structured logging facade: severity-leveled records, a pluggable sink
//! contract, and a dispatcher that fans one record out to many sinks.
//!
//! ## Features
//!
//! - **Structured Records**: Caller, process, host and timing fields filled in for you
//! - **Pluggable Sinks**: Console, file, JSON, network and in-memory backends
//! - **Fan-out Dispatch**: One record, every sink, in registration order
//! - **Structured Fatal Path**: Every sink is notified before a single unwind carrying the record
//!
//! ```
//! use rust_semantic_logger::prelude::*;
//! use rust_semantic_logger::{info, record};
//!
//! let memory = MemorySink::new();
//! let dispatcher = MultiSink::builder().sink(memory.clone()).build();
//!
//! info!(dispatcher, "cache warmed in {} ms", 12);
//!
//! let mut record = record!(LogLevel::Warn, "disk at {}%", 91);
//! record.set_tags(["storage"]);
//! dispatcher.log(LogLevel::Warn, "disk", record);
//!
//! assert_eq!(memory.len(), 2);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        catch_fatal, BacktraceWalker, FatalError, LogLevel, LogRecord, LoggerConfig, LoggerError,
        MultiSink, NoopWalker, OutputFormat, Result, Sink, StackWalker, TimestampFormat,
    };
    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
    #[cfg(feature = "file")]
    pub use crate::sinks::{FileSink, JsonSink};
    pub use crate::sinks::{MemorySink, NullSink};
}

pub use self::core::{
    capture_caller_name, capture_stack_trace, catch_fatal, safe_format, AsSink, BacktraceWalker,
    BenchmarkOperation, DiagnosticCallback, FatalError, HostResolver, LogLevel, LogRecord,
    LoggerConfig, LoggerConfigBuilder, LoggerError, MultiSink, MultiSinkBuilder, NoopWalker,
    OutputFormat, Result, Sink, StackWalker, TimestampFormat,
};
#[cfg(feature = "console")]
pub use sinks::ConsoleSink;
#[cfg(feature = "file")]
pub use sinks::{FileSink, JsonSink};
#[cfg(feature = "network")]
pub use sinks::NetworkSink;
pub use sinks::{MemorySink, NullSink};
