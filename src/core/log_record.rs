//! Log record structure
//!
//! A record is built once per log event, optionally enriched by the caller,
//! then finalized by the dispatcher and handed read-only to every sink.
//!
//! Who fills what:
//! - `level`, `message`: the caller, at construction
//! - `action`: captured at construction from the constructor's caller
//! - `application`, `pid`, `time`, `host_name`: [`LogRecord::finalize_known_fields`]
//! - `tags`, `thread_name`: optionally the caller
//! - `name`, `uuid`, `table`: the sink, through [`LogRecord::stamped`]
//! - `backtrace`: the fatal path
//! - `duration`: the benchmarking helper

use super::config::LoggerConfig;
use super::error::LoggerError;
use super::format::safe_format;
use super::log_level::LogLevel;
use super::stack::{BacktraceWalker, StackWalker};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Stack offset from a constructor to the code that called it
const CALLER_SKIP: usize = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub action: String,
    pub application: String,
    pub pid: u32,
    pub time: Option<DateTime<Utc>>,
    pub host_name: String,
    pub tags: Vec<String>,
    /// Logical class of the source, set by the sink
    pub name: String,
    /// Id of the sink instance that logged the record
    pub uuid: String,
    /// Destination-specific routing hint, e.g. a collection name
    pub table: String,
    pub backtrace: Vec<String>,
    #[serde(with = "duration_nanos")]
    pub duration: Duration,
    pub thread_name: String,
}

impl LogRecord {
    /// Create a record, formatting `template` with `args` at runtime.
    ///
    /// Malformed templates never panic; see [`safe_format`](super::format::safe_format).
    ///
    /// ```
    /// use rust_semantic_logger::{LogLevel, LogRecord};
    ///
    /// let record = LogRecord::new(LogLevel::Warn, "retry {} of {}", &[&2, &5]);
    /// assert_eq!(record.message, "retry 2 of 5");
    /// ```
    #[inline(never)]
    pub fn new(level: LogLevel, template: &str, args: &[&dyn fmt::Display]) -> Self {
        let action = BacktraceWalker.caller_name(CALLER_SKIP);
        Self::open(level, safe_format(template, args), action)
    }

    /// Like [`LogRecord::new`], resolving `action` through `walker`.
    #[inline(never)]
    pub fn new_with(
        walker: &dyn StackWalker,
        level: LogLevel,
        template: &str,
        args: &[&dyn fmt::Display],
    ) -> Self {
        let action = walker.caller_name(CALLER_SKIP);
        Self::open(level, safe_format(template, args), action)
    }

    /// Create a record from pre-checked format arguments, as `record!` does.
    #[inline(never)]
    pub fn from_args(level: LogLevel, args: fmt::Arguments<'_>) -> Self {
        let action = BacktraceWalker.caller_name(CALLER_SKIP);
        Self::open(level, fmt::format(args), action)
    }

    fn open(level: LogLevel, message: String, action: String) -> Self {
        Self {
            level,
            message,
            action,
            application: String::new(),
            pid: 0,
            time: None,
            host_name: String::new(),
            tags: Vec::new(),
            name: String::new(),
            uuid: String::new(),
            table: String::new(),
            backtrace: Vec::new(),
            duration: Duration::ZERO,
            thread_name: String::new(),
        }
    }

    /// Replace the tag sequence wholesale.
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_tags(tags);
        self
    }

    #[must_use]
    pub fn with_thread_name(mut self, thread_name: impl Into<String>) -> Self {
        self.thread_name = thread_name.into();
        self
    }

    /// Override the captured `action`.
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    #[must_use]
    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.application = application.into();
        self
    }

    /// Fill `application`, `pid`, `time` and `host_name`.
    ///
    /// `application` is only defaulted when still empty. A host name that
    /// cannot be resolved leaves the field empty and is reported through the
    /// config's diagnostic channel.
    pub fn finalize_known_fields(&mut self, config: &LoggerConfig) {
        if self.application.is_empty() {
            self.application = config.application_name();
        }
        self.pid = config.pid;
        self.time = Some(Utc::now());
        self.host_name = match config.resolve_host_name() {
            Ok(host_name) => host_name,
            Err(e) => {
                config.diagnostic(&LoggerError::HostName(e).to_string());
                String::new()
            }
        };
    }

    pub fn is_finalized(&self) -> bool {
        self.time.is_some()
    }

    /// Copy of this record carrying a sink's identity.
    #[must_use]
    pub fn stamped(&self, name: &str, uuid: &str, table: &str) -> Self {
        let mut record = self.clone();
        record.name = name.to_string();
        record.uuid = uuid.to_string();
        record.table = table.to_string();
        record
    }

    /// Render as an exception description followed by the backtrace.
    pub fn exception(&self) -> String {
        format!(
            "{} -- panic: {}\n{}",
            self.message,
            self.message,
            self.backtrace.join("\n")
        )
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Durations travel as integer nanoseconds.
mod duration_nanos {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
        serializer.serialize_u64(nanos)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_nanos)
    }
}
