//! Console sink implementation

use crate::core::config::stderr_diagnostic;
use crate::core::output_format::format_text_with_level;
use crate::core::{
    DiagnosticCallback, LogLevel, LogRecord, OutputFormat, Result, Sink, TimestampFormat,
};
use colored::Colorize;
use std::io::Write;
use std::sync::Arc;
use uuid::Uuid;

pub struct ConsoleSink {
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
    uuid: String,
    on_diagnostic: DiagnosticCallback,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::with_colors(true)
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
            uuid: Uuid::new_v4().to_string(),
            on_diagnostic: Arc::new(stderr_diagnostic),
        }
    }

    /// Set the output format for this sink
    ///
    /// ```
    /// use rust_semantic_logger::{ConsoleSink, OutputFormat};
    ///
    /// let sink = ConsoleSink::new().with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, callback: DiagnosticCallback) -> Self {
        self.on_diagnostic = callback;
        self
    }

    /// Error, Fatal and anything more severe goes to stderr
    fn uses_stderr(level: LogLevel) -> bool {
        !level.less_severe_than(LogLevel::Error)
    }

    fn render(&self, record: &LogRecord) -> String {
        match self.output_format {
            OutputFormat::Text => {
                let padded = format!("{:5}", record.level);
                let level = if self.use_colors {
                    padded.color(record.level.color_code()).to_string()
                } else {
                    padded
                };
                format_text_with_level(record, &self.timestamp_format, &level)
            }
            OutputFormat::Json | OutputFormat::Logfmt => {
                self.output_format.format(record, &self.timestamp_format)
            }
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn log(&self, record: &LogRecord) {
        let output = self.render(&record.stamped(self.name(), &self.uuid, self.table()));

        let result = if Self::uses_stderr(record.level) {
            writeln!(std::io::stderr().lock(), "{}", output)
        } else {
            writeln!(std::io::stdout().lock(), "{}", output)
        };
        if let Err(e) = result {
            (self.on_diagnostic)(&format!("ConsoleSink write failed: {}", e));
        }
    }

    fn name(&self) -> &str {
        "ConsoleSink"
    }

    fn uuid(&self) -> &str {
        &self.uuid
    }

    fn flush(&self) -> Result<()> {
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NoopWalker;

    #[test]
    fn test_stream_routing() {
        assert!(!ConsoleSink::uses_stderr(LogLevel::Warn));
        assert!(ConsoleSink::uses_stderr(LogLevel::Error));
        assert!(ConsoleSink::uses_stderr(LogLevel::Fatal));
        assert!(ConsoleSink::uses_stderr(LogLevel::Custom(10)));
        assert!(!ConsoleSink::uses_stderr(LogLevel::Custom(-3)));
    }

    #[test]
    fn test_render_without_colors() {
        let sink = ConsoleSink::with_colors(false);
        let record = LogRecord::new_with(&NoopWalker, LogLevel::Warn, "low disk", &[]);
        let line = sink.render(&record);
        assert!(line.contains("[WARN ]"));
        assert!(line.ends_with("low disk"));
    }

    #[test]
    fn test_render_json_carries_identity() {
        let sink = ConsoleSink::new().with_output_format(OutputFormat::Json);
        let record = LogRecord::new_with(&NoopWalker, LogLevel::Info, "up", &[]);
        let line = sink.render(&record.stamped(sink.name(), sink.uuid(), sink.table()));

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["name"], "ConsoleSink");
        assert_eq!(parsed["uuid"], sink.uuid());
    }

    #[test]
    fn test_log_does_not_panic() {
        let sink = ConsoleSink::with_colors(false);
        sink.log(&LogRecord::new(LogLevel::Info, "console smoke test", &[]));
        sink.flush().unwrap();
    }
}
