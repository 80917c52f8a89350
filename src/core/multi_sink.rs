//! Fan-out dispatcher over an ordered list of sinks

use super::config::LoggerConfig;
use super::error::Result;
use super::fatal;
use super::log_level::LogLevel;
use super::log_record::LogRecord;
use super::sink::{benchmark_record, BenchmarkOperation, Sink};
use std::fmt;
use uuid::Uuid;

/// Broadcasts each record to every registered sink, in insertion order.
///
/// Dispatch is synchronous on the calling thread and adds no locking: the
/// aggregate is exactly as thread-safe as its sinks. A sink that panics is
/// not isolated, so later sinks in the list are not reached, just as if each
/// sink had been called directly.
pub struct MultiSink {
    sinks: Vec<Box<dyn Sink>>,
    config: LoggerConfig,
    uuid: String,
}

impl MultiSink {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::default())
    }

    #[must_use]
    pub fn with_config(config: LoggerConfig) -> Self {
        Self {
            sinks: Vec::new(),
            config,
            uuid: Uuid::new_v4().to_string(),
        }
    }

    #[must_use]
    pub fn builder() -> MultiSinkBuilder {
        MultiSinkBuilder::new()
    }

    pub fn add_sink(&mut self, sink: Box<dyn Sink>) {
        self.sinks.push(sink);
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Finalize `record` and deliver it to every sink.
    ///
    /// Standard and custom levels are delivered alike; `level` and `message`
    /// describe the event but the record is what each sink receives.
    pub fn log(&self, level: LogLevel, message: &str, mut record: LogRecord) {
        let _ = (level, message);
        record.finalize_known_fields(&self.config);
        self.forward(&record);
    }

    /// Deliver `record` to every sink through `log`, then terminate once.
    ///
    /// Sinks never see `fatal_log` from here, since the first one would
    /// terminate before the rest were notified.
    pub fn fatal(&self, level: LogLevel, message: &str, mut record: LogRecord) -> ! {
        let _ = (level, message);
        record.finalize_known_fields(&self.config);
        if record.backtrace.is_empty() {
            record.backtrace = self.config.stack_walker.frames();
        }
        self.forward(&record);
        fatal::raise(record)
    }

    /// Forward to each sink's [`Sink::benchmark_with`].
    ///
    /// Each sink times the operation independently, so `operation` runs once
    /// per sink and the recorded durations differ. Treat the first sink's
    /// record as authoritative if a single figure is needed.
    ///
    /// Every sink finalizes against this dispatcher's config, and `action`
    /// names the caller of this method.
    #[inline(never)]
    pub fn benchmark_info(&self, level: LogLevel, message: &str, operation: BenchmarkOperation<'_>) {
        let action = self.config.stack_walker.caller_name(1);
        self.benchmark_from(action, level, message, operation);
    }

    /// Flush every sink, returning the first error after trying them all.
    pub fn flush(&self) -> Result<()> {
        let mut first_error = None;
        for sink in &self.sinks {
            if let Err(e) = sink.flush() {
                self.config
                    .diagnostic(&format!("Sink '{}' flush failed: {}", sink.name(), e));
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn benchmark_from(
        &self,
        action: String,
        level: LogLevel,
        message: &str,
        operation: BenchmarkOperation<'_>,
    ) {
        let record = benchmark_record(level, message, action);
        Sink::benchmark_with(self, &self.config, record, operation);
    }

    fn forward(&self, record: &LogRecord) {
        for sink in &self.sinks {
            sink.log(record);
        }
    }
}

impl Default for MultiSink {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MultiSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiSink")
            .field("sinks", &self.sinks.iter().map(|s| s.name()).collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

/// Nested dispatchers forward without finalizing again.
impl Sink for MultiSink {
    fn log(&self, record: &LogRecord) {
        self.forward(record);
    }

    fn name(&self) -> &str {
        "MultiSink"
    }

    fn uuid(&self) -> &str {
        &self.uuid
    }

    fn flush(&self) -> Result<()> {
        MultiSink::flush(self)
    }

    fn fatal_log(&self, record: LogRecord) -> ! {
        let level = record.level;
        let message = record.message.clone();
        self.fatal(level, &message, record)
    }

    #[inline(never)]
    fn benchmark_info(&self, level: LogLevel, message: &str, operation: BenchmarkOperation<'_>) {
        let action = self.config.stack_walker.caller_name(1);
        self.benchmark_from(action, level, message, operation);
    }

    /// Hand the same open record to every sink, each timing on its own.
    fn benchmark_with(
        &self,
        config: &LoggerConfig,
        record: LogRecord,
        operation: BenchmarkOperation<'_>,
    ) {
        for sink in &self.sinks {
            sink.benchmark_with(config, record.clone(), &mut *operation);
        }
    }
}

/// Builder for constructing a [`MultiSink`]
///
/// # Example
/// ```
/// use rust_semantic_logger::prelude::*;
///
/// let dispatcher = MultiSink::builder()
///     .config(LoggerConfig::builder().application("api").build())
///     .sink(MemorySink::new())
///     .sink(NullSink::new())
///     .build();
/// assert_eq!(dispatcher.len(), 2);
/// ```
pub struct MultiSinkBuilder {
    sinks: Vec<Box<dyn Sink>>,
    config: LoggerConfig,
}

impl MultiSinkBuilder {
    pub fn new() -> Self {
        Self {
            sinks: Vec::new(),
            config: LoggerConfig::default(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_sink(mut self, sink: Box<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> MultiSink {
        let mut dispatcher = MultiSink::with_config(self.config);
        for sink in self.sinks {
            dispatcher.add_sink(sink);
        }
        dispatcher
    }
}

impl Default for MultiSinkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
