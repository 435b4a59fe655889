//! Console line layouts
//!
//! Two layouts exist:
//! - Long: `timestamp name(9) level(8) message`, dated with a UTC offset
//! - Short: `timestamp message`, time of day only
//!
//! The long layout is selected only when the process verbosity is `debug`.

use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::style::{Field, StyleSheet};
use super::timestamp::TimestampFormat;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineFormat {
    /// Example: `2025-01-08 10:30:45+0100 timeline  INFO     Downloading 12 events`
    Long,

    /// Example: `10:30:45 Downloading 12 events`
    #[default]
    Short,
}

impl LineFormat {
    /// Pick the layout for the process verbosity
    pub fn for_verbosity(verbosity: Option<LogLevel>) -> Self {
        match verbosity {
            Some(LogLevel::Debug) => LineFormat::Long,
            _ => LineFormat::Short,
        }
    }

    /// printf-style description of the layout's fields
    pub fn pattern(&self) -> &'static str {
        match self {
            LineFormat::Long => "%(asctime)s %(name)-9s %(levelname)-8s %(message)s",
            LineFormat::Short => "%(asctime)s %(message)s",
        }
    }

    pub fn timestamp_format(&self) -> TimestampFormat {
        match self {
            LineFormat::Long => TimestampFormat::DateTimeZone,
            LineFormat::Short => TimestampFormat::TimeOnly,
        }
    }

    /// strftime pattern for the `asctime` field
    pub fn date_format(&self) -> &'static str {
        match self {
            LineFormat::Long => "%Y-%m-%d %H:%M:%S%z",
            LineFormat::Short => "%H:%M:%S",
        }
    }

    /// Render a record, colorized when a style sheet is given
    pub fn render(&self, entry: &LogEntry, styles: Option<&StyleSheet>) -> String {
        let asctime = self.timestamp_format().format(&entry.timestamp);
        let paint = |field: Field, text: String| match styles {
            Some(sheet) => sheet.field(field).apply(&text).to_string(),
            None => text,
        };
        let message = match styles {
            Some(sheet) => sheet.level(entry.level).apply(&entry.message).to_string(),
            None => entry.message.clone(),
        };

        match self {
            LineFormat::Long => format!(
                "{} {} {} {}",
                paint(Field::Asctime, asctime),
                paint(Field::Name, format!("{:<9}", entry.logger_name)),
                paint(Field::Levelname, format!("{:<8}", entry.level.to_str())),
                message
            ),
            LineFormat::Short => format!("{} {}", paint(Field::Asctime, asctime), message),
        }
    }
}
