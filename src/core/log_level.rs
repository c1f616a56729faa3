//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log message, ranked from `Silent` (0) to `Trace` (6).
///
/// A higher rank means a more verbose level. `Silent` is only meaningful as a
/// threshold: it suppresses everything and is never the level of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Silent = 0,
    Fatal = 1,
    Error = 2,
    Warning = 3,
    #[default]
    Info = 4,
    Debug = 5,
    Trace = 6,
}

impl LogLevel {
    /// All levels in rank order.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Silent,
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// Numeric rank of the level.
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Inverse of [`LogLevel::rank`]. Ranks above 6 saturate to `Trace`.
    #[inline]
    pub const fn from_rank(rank: u8) -> Self {
        match rank {
            0 => LogLevel::Silent,
            1 => LogLevel::Fatal,
            2 => LogLevel::Error,
            3 => LogLevel::Warning,
            4 => LogLevel::Info,
            5 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    /// Whether a record at this level passes the given threshold.
    ///
    /// ```
    /// use ultralog::LogLevel;
    ///
    /// assert!(LogLevel::Error.is_emitted_at(LogLevel::Warning));
    /// assert!(!LogLevel::Info.is_emitted_at(LogLevel::Warning));
    /// assert!(!LogLevel::Fatal.is_emitted_at(LogLevel::Silent));
    /// ```
    #[inline]
    pub const fn is_emitted_at(self, threshold: LogLevel) -> bool {
        !matches!(self, LogLevel::Silent) && self.rank() <= threshold.rank()
    }

    /// Single-letter code used by the console sink.
    pub const fn code(self) -> char {
        match self {
            LogLevel::Silent => 'S',
            LogLevel::Fatal => 'F',
            LogLevel::Error => 'E',
            LogLevel::Warning => 'W',
            LogLevel::Info => 'I',
            LogLevel::Debug => 'D',
            LogLevel::Trace => 'T',
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Silent => "silent",
            LogLevel::Fatal => "fatal",
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Silent => White,
            LogLevel::Fatal => BrightRed,
            LogLevel::Error => Red,
            LogLevel::Warning => Yellow,
            LogLevel::Info => Green,
            LogLevel::Debug => Blue,
            LogLevel::Trace => BrightBlack,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    /// Accepts level names (any case, `warn` as an alias), single-letter
    /// codes and numeric ranks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "silent" | "s" | "0" => Ok(LogLevel::Silent),
            "fatal" | "f" | "1" => Ok(LogLevel::Fatal),
            "error" | "e" | "2" => Ok(LogLevel::Error),
            "warning" | "warn" | "w" | "3" => Ok(LogLevel::Warning),
            "info" | "i" | "4" => Ok(LogLevel::Info),
            "debug" | "d" | "5" => Ok(LogLevel::Debug),
            "trace" | "t" | "6" => Ok(LogLevel::Trace),
            _ => Err(LoggerError::config(
                "log level",
                format!("invalid log level: '{}'", trimmed),
            )),
        }
    }
}
