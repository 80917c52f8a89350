//! Log level definitions
//!
//! Levels are ordered by their integer ordinal. The six standard levels occupy
//! ordinals 0 through 5; any other ordinal is an application-defined custom
//! level that is accepted everywhere and rendered as `CUSTOM`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Display name used for ordinals outside the standard six.
pub const CUSTOM_LEVEL_NAME: &str = "CUSTOM";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(into = "i32", from = "i32")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
    /// Application-defined level carrying its own ordinal
    Custom(i32),
}

impl LogLevel {
    /// The standard levels, least severe first.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Build a level from its ordinal, mapping 0..=5 onto the named variants.
    #[must_use]
    pub const fn from_ordinal(ordinal: i32) -> Self {
        match ordinal {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            5 => LogLevel::Fatal,
            other => LogLevel::Custom(other),
        }
    }

    #[must_use]
    pub const fn ordinal(&self) -> i32 {
        match self {
            LogLevel::Trace => 0,
            LogLevel::Debug => 1,
            LogLevel::Info => 2,
            LogLevel::Warn => 3,
            LogLevel::Error => 4,
            LogLevel::Fatal => 5,
            LogLevel::Custom(ordinal) => *ordinal,
        }
    }

    /// Whether this level is strictly less severe than `other`.
    ///
    /// Useful for picking out the records worth viewing above a threshold.
    #[must_use]
    pub const fn less_severe_than(&self, other: LogLevel) -> bool {
        self.ordinal() < other.ordinal()
    }

    /// True when the ordinal is one of the six named levels.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        matches!(self.ordinal(), 0..=5)
    }

    pub fn to_str(&self) -> &'static str {
        match self.ordinal() {
            0 => "TRACE",
            1 => "DEBUG",
            2 => "INFO",
            3 => "WARN",
            4 => "ERROR",
            5 => "FATAL",
            _ => CUSTOM_LEVEL_NAME,
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self.ordinal() {
            0 => BrightBlack,
            1 => Blue,
            2 => Green,
            3 => Yellow,
            4 => Red,
            5 => BrightRed,
            _ => Magenta,
        }
    }
}

impl PartialEq for LogLevel {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal() == other.ordinal()
    }
}

impl Eq for LogLevel {}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl Hash for LogLevel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordinal().hash(state);
    }
}

impl From<i32> for LogLevel {
    fn from(ordinal: i32) -> Self {
        LogLevel::from_ordinal(ordinal)
    }
}

impl From<LogLevel> for i32 {
    fn from(level: LogLevel) -> Self {
        level.ordinal()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => trimmed
                .parse::<i32>()
                .map(LogLevel::from_ordinal)
                .map_err(|_| format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_ordering_matches_ordinals() {
        for a in LogLevel::ALL {
            for b in LogLevel::ALL {
                assert_eq!(a.less_severe_than(b), a.ordinal() < b.ordinal());
            }
        }
        assert!(LogLevel::Trace.less_severe_than(LogLevel::Fatal));
        assert!(!LogLevel::Fatal.less_severe_than(LogLevel::Fatal));
    }

    #[test]
    fn test_custom_levels_are_ordered() {
        let below = LogLevel::Custom(-1);
        let above = LogLevel::Custom(42);

        assert!(below.less_severe_than(LogLevel::Trace));
        assert!(LogLevel::Fatal.less_severe_than(above));
        assert!(below < above);
        assert_eq!(above.to_str(), "CUSTOM");
        assert!(!above.is_standard());
    }

    #[test]
    fn test_custom_with_standard_ordinal_is_that_level() {
        assert_eq!(LogLevel::Custom(3), LogLevel::Warn);
        assert_eq!(LogLevel::Custom(3).to_str(), "WARN");
        assert_eq!(LogLevel::from_ordinal(4), LogLevel::Error);
        assert!(matches!(LogLevel::from_ordinal(4), LogLevel::Error));
    }

    #[test]
    fn test_display_names() {
        let names: Vec<String> = LogLevel::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(names, ["TRACE", "DEBUG", "INFO", "WARN", "ERROR", "FATAL"]);
        assert_eq!(format!("{:5}", LogLevel::Info), "INFO ");
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!(" Fatal ".parse::<LogLevel>(), Ok(LogLevel::Fatal));
        assert_eq!("17".parse::<LogLevel>(), Ok(LogLevel::Custom(17)));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_serializes_as_ordinal() {
        assert_eq!(serde_json::to_string(&LogLevel::Error).unwrap(), "4");
        assert_eq!(serde_json::to_string(&LogLevel::Custom(9)).unwrap(), "9");

        let level: LogLevel = serde_json::from_str("1").unwrap();
        assert!(matches!(level, LogLevel::Debug));
    }
}
