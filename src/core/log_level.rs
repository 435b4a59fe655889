//! Log level definitions
//!
//! The numeric values follow the classic severity ladder with the extra
//! decorative levels (`Spam`, `Verbose`, `Notice`, `Success`) slotted in
//! between the standard ones.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Spam = 5,
    Debug = 10,
    Verbose = 15,
    #[default]
    Info = 20,
    Notice = 25,
    Warning = 30,
    Success = 35,
    Error = 40,
    Critical = 50,
}

impl LogLevel {
    /// Every level, most verbose first
    pub const ALL: [LogLevel; 9] = [
        LogLevel::Spam,
        LogLevel::Debug,
        LogLevel::Verbose,
        LogLevel::Info,
        LogLevel::Notice,
        LogLevel::Warning,
        LogLevel::Success,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Spam => "SPAM",
            LogLevel::Debug => "DEBUG",
            LogLevel::Verbose => "VERBOSE",
            LogLevel::Info => "INFO",
            LogLevel::Notice => "NOTICE",
            LogLevel::Warning => "WARNING",
            LogLevel::Success => "SUCCESS",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Most verbose level; loggers and the debug file sink are fixed at it.
    pub const fn lowest() -> Self {
        LogLevel::Spam
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SPAM" => Ok(LogLevel::Spam),
            "DEBUG" => Ok(LogLevel::Debug),
            "VERBOSE" => Ok(LogLevel::Verbose),
            "INFO" => Ok(LogLevel::Info),
            "NOTICE" => Ok(LogLevel::Notice),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "SUCCESS" => Ok(LogLevel::Success),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" | "FATAL" => Ok(LogLevel::Critical),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("Warning".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!("FATAL".parse::<LogLevel>(), Ok(LogLevel::Critical));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_decorative_levels_sit_between_standard_ones() {
        assert!(LogLevel::Spam < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Verbose && LogLevel::Verbose < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Notice && LogLevel::Notice < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Success && LogLevel::Success < LogLevel::Error);
        assert_eq!(LogLevel::lowest(), LogLevel::ALL[0]);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let level: LogLevel = serde_json::from_str("\"notice\"").unwrap();
        assert_eq!(level, LogLevel::Notice);
        assert_eq!(serde_json::to_string(&LogLevel::Spam).unwrap(), "\"spam\"");
    }
}
