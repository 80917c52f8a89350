//! Sink trait for log backends

use super::config::LoggerConfig;
use super::error::Result;
use super::fatal;
use super::log_level::LogLevel;
use super::log_record::LogRecord;
use super::stack::NoopWalker;
use std::time::Instant;

/// Unit of work timed by [`Sink::benchmark_info`]; it may log through the
/// handle it is given.
pub type BenchmarkOperation<'a> = &'a mut dyn FnMut(&dyn Sink);

/// Hands out `&dyn Sink` from provided trait methods.
pub trait AsSink {
    fn as_sink(&self) -> &dyn Sink;
}

impl<T: Sink> AsSink for T {
    fn as_sink(&self) -> &dyn Sink {
        self
    }
}

/// A backend that receives log records.
///
/// `log` is synchronous and infallible from the caller's side: a backend
/// reports its own I/O trouble through diagnostics instead of returning it.
/// Implementations use interior mutability since records arrive through
/// `&self`, possibly from several threads.
pub trait Sink: AsSink + Send + Sync {
    fn log(&self, record: &LogRecord);

    /// Logical class name stamped into `name`
    fn name(&self) -> &str;

    /// Instance id stamped into `uuid`
    fn uuid(&self) -> &str;

    /// Routing hint stamped into `table`
    fn table(&self) -> &str {
        ""
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    /// Log the record, then terminate with it as the payload.
    fn fatal_log(&self, record: LogRecord) -> ! {
        self.fatal_log_with(&LoggerConfig::default(), record)
    }

    /// Like [`Sink::fatal_log`], filling an empty backtrace through the
    /// walker in `config`.
    fn fatal_log_with(&self, config: &LoggerConfig, mut record: LogRecord) -> ! {
        if record.backtrace.is_empty() {
            record.backtrace = config.stack_walker.frames();
        }
        self.log(&record);
        fatal::raise(record)
    }

    /// Run `operation`, then log a record at `level` whose `duration` is the
    /// measured wall-clock time.
    ///
    /// A bare sink has no dispatcher config, so the record is finalized with
    /// [`LoggerConfig::default`]. Its `action` names the caller of this method.
    #[inline(never)]
    fn benchmark_info(&self, level: LogLevel, message: &str, operation: BenchmarkOperation<'_>) {
        let config = LoggerConfig::default();
        let action = config.stack_walker.caller_name(1);
        self.benchmark_with(&config, benchmark_record(level, message, action), operation);
    }

    /// Time `operation`, then log `record` with `duration` set and its known
    /// fields finalized from `config`.
    fn benchmark_with(
        &self,
        config: &LoggerConfig,
        mut record: LogRecord,
        operation: BenchmarkOperation<'_>,
    ) {
        let start = Instant::now();
        operation(self.as_sink());
        record.duration = start.elapsed();
        record.finalize_known_fields(config);
        self.log(&record);
    }
}

/// Open record for a benchmark; `message` is taken literally.
pub(crate) fn benchmark_record(level: LogLevel, message: &str, action: String) -> LogRecord {
    LogRecord::new_with(&NoopWalker, level, "{}", &[&message]).with_action(action)
}
