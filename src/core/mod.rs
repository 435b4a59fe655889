//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod line_format;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod style;
pub mod timestamp;

pub use appender::{Appender, SharedAppender};
pub use error::{LoggerError, Result};
pub use line_format::LineFormat;
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use style::{Field, Style, StyleSheet};
pub use timestamp::TimestampFormat;
