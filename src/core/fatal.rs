//! Fatal termination payload
//!
//! The fatal path unwinds with a [`FatalError`] carrying the full record, so
//! a supervising boundary can inspect level, message and backtrace instead
//! of a plain panic string.

use super::log_record::LogRecord;
use std::panic::{self, AssertUnwindSafe};

#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", .record.exception())]
pub struct FatalError {
    pub record: LogRecord,
}

impl FatalError {
    pub fn new(record: LogRecord) -> Self {
        Self { record }
    }

    pub fn into_record(self) -> LogRecord {
        self.record
    }
}

/// Begin fatal termination with `record` as the payload.
pub fn raise(record: LogRecord) -> ! {
    panic::panic_any(FatalError::new(record))
}

/// Run `f`, converting a fatal termination into `Err`.
///
/// Panics that did not come from the fatal path are resumed untouched.
///
/// ```
/// use rust_semantic_logger::prelude::*;
///
/// let dispatcher = MultiSink::new();
/// let result = catch_fatal(|| {
///     let record = LogRecord::new(LogLevel::Fatal, "out of disk", &[]);
///     dispatcher.fatal(LogLevel::Fatal, "out of disk", record)
/// });
/// let err = result.unwrap_err();
/// assert_eq!(err.record.message, "out of disk");
/// ```
pub fn catch_fatal<F, T>(f: F) -> Result<T, FatalError>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<FatalError>() {
            Ok(fatal) => Err(*fatal),
            Err(other) => panic::resume_unwind(other),
        },
    }
}
