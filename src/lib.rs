//! # pytr utils
//!
//! Process-level helpers for the pytr CLI.
//!
//! ## Features
//!
//! - **Named loggers**: colorized console output per logger, short or long
//!   layout depending on verbosity
//! - **Debug file**: one shared log file, optionally restricted to a set of
//!   logger names
//! - **Release check**: compares the running version with the newest tag
//! - **Previews**: truncated pretty-printed JSON for debug output

pub mod appenders;
pub mod core;
pub mod factory;
pub mod macros;
pub mod preview;
pub mod version;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        Appender, LineFormat, LogEntry, LogLevel, Logger, LoggerError, Result, SharedAppender,
        StyleSheet, TimestampFormat,
    };
    pub use crate::factory::{LoggerFactory, LoggerOptions};
    pub use crate::preview::preview;
    pub use crate::version::{VersionChecker, VersionStatus};
}

pub use appenders::{ConsoleAppender, ConsoleStream, FileAppender};
pub use crate::core::{
    Appender, Field, LineFormat, LogEntry, LogLevel, Logger, LoggerError, Result, SharedAppender,
    Style, StyleSheet, TimestampFormat,
};
pub use factory::{LoggerFactory, LoggerOptions, LoggingState};
pub use preview::{preview, DEFAULT_PREVIEW_LINES};
pub use version::{
    compare_versions, parse_version, TagSource, VersionCheckError, VersionChecker, VersionStatus,
};

use std::sync::Arc;

/// Logger for `name` from the process-wide factory.
///
/// Each of `options`' settings may be supplied only once per process; a
/// repeat is a [`LoggerError`] naming the setting.
pub fn get_logger(name: &str, options: LoggerOptions) -> Result<Arc<Logger>> {
    LoggerFactory::global().get_logger(name, options)
}

/// Check the running version against the newest pytr release and log the
/// result. Never fails; network or parse problems are logged.
#[cfg(feature = "network")]
pub fn check_version(installed_version: &str) {
    VersionChecker::new(LoggerFactory::global(), version::GithubTags::new())
        .check(installed_version);
}
