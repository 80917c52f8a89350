//! Output format configuration for log records
//!
//! - Text: human-readable line (default)
//! - Json: the record's serde form, keeping the exported field names
//! - Logfmt: `key=value` pairs using the same field names

use super::log_record::LogRecord;
use super::timestamp::TimestampFormat;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Example: `[2025-01-08T10:30:45.123Z] [INFO ] billing[812] app::run - Request processed`
    #[default]
    Text,

    /// Example: `{"level":2,"message":"Request processed",...}`
    Json,

    /// Example: `time=2025-01-08T10:30:45.123Z level=INFO message="Request processed"`
    Logfmt,
}

impl OutputFormat {
    pub fn format(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Text => format_text(record, timestamp_format),
            OutputFormat::Json => format_json(record),
            OutputFormat::Logfmt => format_logfmt(record, timestamp_format),
        }
    }
}

/// Escape line breaks so one record stays on one line
pub fn sanitize_line(value: &str) -> String {
    value
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Text rendering without colors; the console sink colors the level itself.
pub fn format_text(record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
    format_text_with_level(record, timestamp_format, &format!("{:5}", record.level))
}

pub(crate) fn format_text_with_level(
    record: &LogRecord,
    timestamp_format: &TimestampFormat,
    level: &str,
) -> String {
    let mut line = format!(
        "[{}] [{}] {}[{}] {} - {}",
        timestamp_format.format_opt(record.time.as_ref()),
        level,
        sanitize_line(&record.application),
        record.pid,
        sanitize_line(&record.action),
        sanitize_line(&record.message)
    );

    if !record.thread_name.is_empty() {
        line.push_str(&format!(" thread={}", sanitize_line(&record.thread_name)));
    }
    if !record.tags.is_empty() {
        line.push_str(&format!(" tags=[{}]", sanitize_line(&record.tags.join(","))));
    }
    if !record.duration.is_zero() {
        line.push_str(&format!(" duration={:?}", record.duration));
    }
    // Frames are the only continuation lines
    for frame in &record.backtrace {
        line.push_str("\n    at ");
        line.push_str(&sanitize_line(frame));
    }

    line
}

fn format_json(record: &LogRecord) -> String {
    // Serializing plain strings and numbers cannot fail
    record.to_json().unwrap_or_default()
}

fn format_logfmt(record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
    let mut parts = vec![
        format!(
            "time={}",
            escape_logfmt_value(&timestamp_format.format_opt(record.time.as_ref()))
        ),
        format!("level={}", record.level.to_str()),
        format!("message={}", quote_logfmt_value(&record.message)),
        format!("action={}", escape_logfmt_value(&record.action)),
        format!("application={}", escape_logfmt_value(&record.application)),
        format!("pid={}", record.pid),
        format!("host_name={}", escape_logfmt_value(&record.host_name)),
    ];

    for (key, value) in [
        ("name", &record.name),
        ("uuid", &record.uuid),
        ("table", &record.table),
        ("thread_name", &record.thread_name),
    ] {
        if !value.is_empty() {
            parts.push(format!("{}={}", key, escape_logfmt_value(value)));
        }
    }
    if !record.tags.is_empty() {
        parts.push(format!("tags={}", escape_logfmt_value(&record.tags.join(","))));
    }
    if !record.duration.is_zero() {
        parts.push(format!("duration={}", record.duration.as_nanos()));
    }

    parts.join(" ")
}

/// Quote a logfmt value if it contains spaces, quotes, `=` or nothing at all
fn escape_logfmt_value(value: &str) -> String {
    if value.is_empty()
        || value.contains(' ')
        || value.contains('"')
        || value.contains('=')
        || value.contains('\n')
        || value.contains('\r')
        || value.contains('\t')
    {
        quote_logfmt_value(value)
    } else {
        value.to_string()
    }
}

fn quote_logfmt_value(value: &str) -> String {
    format!(
        "\"{}\"",
        sanitize_line(&value.replace('\\', "\\\\").replace('"', "\\\""))
    )
}
