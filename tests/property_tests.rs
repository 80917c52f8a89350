//! Property-based tests for rust_semantic_logger using proptest

use proptest::prelude::*;
use rust_semantic_logger::prelude::*;
use rust_semantic_logger::safe_format;
use std::fmt;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
        any::<i32>().prop_map(LogLevel::Custom),
    ]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Severity comparison follows the ordinal, custom levels included
    #[test]
    fn test_less_severe_than_follows_ordinal(level1 in any_level(), level2 in any_level()) {
        assert_eq!(
            level1.less_severe_than(level2),
            level1.ordinal() < level2.ordinal()
        );
        assert_eq!(level1 < level2, level1.ordinal() < level2.ordinal());
        assert_eq!(level1 == level2, level1.ordinal() == level2.ordinal());
    }

    /// Every ordinal has a printable name
    #[test]
    fn test_to_str_is_total(ordinal in any::<i32>()) {
        let level = LogLevel::from_ordinal(ordinal);
        let name = level.to_str();
        assert!(!name.is_empty());
        if level.is_standard() {
            assert_ne!(name, "CUSTOM");
        } else {
            assert_eq!(name, "CUSTOM");
        }
        assert_eq!(format!("{}", level), name);
    }

    /// Standard names parse back to the same level in any case
    #[test]
    fn test_standard_names_roundtrip(index in 0usize..6, use_lower in any::<bool>()) {
        let level = LogLevel::ALL[index];
        let input = if use_lower {
            level.to_str().to_lowercase()
        } else {
            level.to_str().to_string()
        };

        let parsed: std::result::Result<LogLevel, String> = input.parse();
        assert_eq!(parsed, Ok(level));
    }

    /// Serialized levels carry the ordinal, so custom values survive
    #[test]
    fn test_level_serializes_as_ordinal(level in any_level()) {
        let json = serde_json::to_string(&level).unwrap();
        assert_eq!(json, level.ordinal().to_string());
        let back: LogLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ordinal(), level.ordinal());
    }
}

// ============================================================================
// Formatting Tests
// ============================================================================

struct Broken;

impl fmt::Display for Broken {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Err(fmt::Error)
    }
}

proptest! {
    /// Arbitrary templates never panic, whatever the arguments
    #[test]
    fn test_safe_format_never_panics(template in ".*", arg_count in 0usize..4) {
        let values = ["a", "b", "c"];
        let mut args: Vec<&dyn fmt::Display> = values
            .iter()
            .take(arg_count.min(values.len()))
            .map(|value| value as &dyn fmt::Display)
            .collect();
        if arg_count == 3 {
            args.push(&Broken);
        }

        let _ = safe_format(&template, &args);
    }

    /// Templates without braces come back verbatim when no arguments are given
    #[test]
    fn test_plain_text_untouched(text in "[^{}]*") {
        assert_eq!(safe_format(&text, &[]), text);
    }

    /// Record construction degrades instead of failing on template errors
    #[test]
    fn test_record_new_never_panics(template in "[a-z{} ]{0,24}", level in any_level()) {
        let record = LogRecord::new_with(&NoopWalker, level, &template, &[&1]);
        assert_eq!(record.level, level);
        assert_eq!(record.action, "unknown");
    }
}

// ============================================================================
// LogRecord Tests
// ============================================================================

proptest! {
    /// set_tags replaces the tag list, never appends
    #[test]
    fn test_set_tags_replaces(
        first in prop::collection::vec("[a-z]{1,8}", 0..5),
        second in prop::collection::vec("[a-z]{1,8}", 0..5)
    ) {
        let mut record = LogRecord::new_with(&NoopWalker, LogLevel::Info, "tagged", &[]);
        record.set_tags(first);
        record.set_tags(second.clone());
        assert_eq!(record.tags, second);
    }

    /// Exception text is the message twice, then one frame per line
    #[test]
    fn test_exception_format(
        message in "[a-zA-Z0-9 ]*",
        backtrace in prop::collection::vec("[a-z]+\\.rs:[0-9]{1,4} [a-z_]+\\(\\)", 0..6)
    ) {
        let mut record = LogRecord::new_with(&NoopWalker, LogLevel::Fatal, "{}", &[&message]);
        record.backtrace = backtrace.clone();

        let exception = record.exception();
        let header = format!("{} -- panic: {}\n", message, message);
        assert!(exception.starts_with(&header));
        assert_eq!(&exception[header.len()..], backtrace.join("\n"));
    }

    /// Finalizing always fills the dispatch fields from the config
    #[test]
    fn test_finalize_fills_known_fields(
        application in "[a-z]{1,12}",
        pid in any::<u32>(),
        host in "[a-z0-9-]{1,16}"
    ) {
        let config = LoggerConfig::builder()
            .application(application.clone())
            .pid(pid)
            .host_name(host.clone())
            .stack_walker(std::sync::Arc::new(NoopWalker))
            .build();

        let mut record = LogRecord::new_with(&NoopWalker, LogLevel::Info, "m", &[]);
        record.finalize_known_fields(&config);

        assert_eq!(record.application, application);
        assert_eq!(record.pid, pid);
        assert_eq!(record.host_name, host);
        assert!(record.is_finalized());
    }

    /// Text rendering keeps one record on one line
    #[test]
    fn test_text_output_single_line(message in ".*") {
        let mut record = LogRecord::new_with(&NoopWalker, LogLevel::Info, "{}", &[&message]);
        record.finalize_known_fields(
            &LoggerConfig::builder().application("p").host_name("h").build(),
        );

        let line = OutputFormat::Text.format(&record, &TimestampFormat::Iso8601);
        assert!(!line.contains('\n'));
        assert!(!line.contains('\r'));
    }
}
