//! JSON sink for structured logging

use crate::core::config::stderr_diagnostic;
use crate::core::{DiagnosticCallback, LogRecord, LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

/// JSON file sink for structured logging
///
/// Writes each record as a single-line JSON object (JSONL), using the
/// record's exported field names as keys. The `table` routing hint names the
/// collection a downstream shipper should load the line into.
pub struct JsonSink {
    writer: Mutex<BufWriter<File>>,
    pretty: bool,
    table: String,
    uuid: String,
    on_diagnostic: DiagnosticCallback,
}

impl JsonSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            pretty: false,
            table: String::new(),
            uuid: Uuid::new_v4().to_string(),
            on_diagnostic: Arc::new(stderr_diagnostic),
        })
    }

    /// Create a new JSON sink with pretty printing
    pub fn new_pretty<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut sink = Self::new(path)?;
        sink.pretty = true;
        Ok(sink)
    }

    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, callback: DiagnosticCallback) -> Self {
        self.on_diagnostic = callback;
        self
    }

    fn write_record(&self, record: &LogRecord) -> Result<()> {
        let stamped = record.stamped(self.name(), &self.uuid, &self.table);
        let json = if self.pretty {
            stamped.to_json_pretty()?
        } else {
            stamped.to_json()?
        };

        writeln!(self.writer.lock(), "{}", json)
            .map_err(|e| LoggerError::io_operation("writing JSON record", "append failed", e))
    }
}

impl Sink for JsonSink {
    fn log(&self, record: &LogRecord) {
        if let Err(e) = self.write_record(record) {
            (self.on_diagnostic)(&format!("JsonSink write failed: {}", e));
        }
    }

    fn name(&self) -> &str {
        "JsonSink"
    }

    fn uuid(&self) -> &str {
        &self.uuid
    }

    fn table(&self) -> &str {
        &self.table
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

impl Drop for JsonSink {
    fn drop(&mut self) {
        let _ = self.writer.get_mut().flush();
    }
}
