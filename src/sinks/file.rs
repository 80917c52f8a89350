//! File sink implementation

use crate::core::config::stderr_diagnostic;
use crate::core::{
    DiagnosticCallback, LogRecord, LoggerError, OutputFormat, Result, Sink, TimestampFormat,
};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

/// Appends one rendered line per record to a file.
pub struct FileSink {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
    uuid: String,
    on_diagnostic: DiagnosticCallback,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::Text,
            uuid: Uuid::new_v4().to_string(),
            on_diagnostic: Arc::new(stderr_diagnostic),
        })
    }

    /// Set the timestamp format for this sink
    ///
    /// ```no_run
    /// use rust_semantic_logger::{FileSink, TimestampFormat};
    ///
    /// let sink = FileSink::new("/var/log/app.log")
    ///     .unwrap()
    ///     .with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, callback: DiagnosticCallback) -> Self {
        self.on_diagnostic = callback;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_record(&self, record: &LogRecord) -> Result<()> {
        let stamped = record.stamped(self.name(), &self.uuid, self.table());
        let mut line = self.output_format.format(&stamped, &self.timestamp_format);
        line.push('\n');

        self.writer.lock().write_all(line.as_bytes())?;
        Ok(())
    }
}

impl Sink for FileSink {
    fn log(&self, record: &LogRecord) {
        if let Err(e) = self.write_record(record) {
            (self.on_diagnostic)(&format!(
                "FileSink write to '{}' failed: {}",
                self.path.display(),
                e
            ));
        }
    }

    fn name(&self) -> &str {
        "FileSink"
    }

    fn uuid(&self) -> &str {
        &self.uuid
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Buffered lines must reach the disk
        let _ = self.writer.get_mut().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, NoopWalker};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_sink_writes_lines() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("app.log");
        let sink = FileSink::new(&log_path)?;

        sink.log(&LogRecord::new_with(&NoopWalker, LogLevel::Info, "first", &[]));
        sink.log(&LogRecord::new_with(&NoopWalker, LogLevel::Error, "second\nline", &[]));
        sink.flush()?;

        let content = fs::read_to_string(&log_path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[INFO ]") && lines[0].ends_with("first"));
        assert!(lines[1].contains("second\\nline"));
        Ok(())
    }

    #[test]
    fn test_file_sink_appends() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("append.log");

        for message in ["one", "two"] {
            let sink = FileSink::new(&log_path)?;
            sink.log(&LogRecord::new_with(&NoopWalker, LogLevel::Warn, message, &[]));
        }

        let content = fs::read_to_string(&log_path)?;
        assert_eq!(content.lines().count(), 2);
        Ok(())
    }

    #[test]
    fn test_open_failure_has_context() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("no-such-dir").join("app.log");

        let err = FileSink::new(&missing).err().unwrap();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
    }
}
