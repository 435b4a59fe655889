//! Per-call logger configuration
//!
//! `LoggerOptions` carries the three optional process-wide settings a call to
//! [`LoggerFactory::get_logger`](super::LoggerFactory::get_logger) may supply.
//! It can be built in code, deserialized from a config file, or read from the
//! environment.

use crate::core::{LogLevel, LoggerError, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable holding the verbosity (`debug`, `info`, `warning`, ...)
pub const ENV_LOG_LEVEL: &str = "PYTR_LOG_LEVEL";
/// Environment variable holding the debug log file path
pub const ENV_DEBUG_FILE: &str = "PYTR_DEBUG_FILE";
/// Environment variable holding the comma separated debug filter
pub const ENV_DEBUG_FILTER: &str = "PYTR_DEBUG_FILTER";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerOptions {
    pub verbosity: Option<LogLevel>,
    pub debug_file: Option<PathBuf>,
    /// Comma separated short logger names allowed to write to the debug file
    pub debug_filter: Option<String>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn verbosity(mut self, level: LogLevel) -> Self {
        self.verbosity = Some(level);
        self
    }

    #[must_use]
    pub fn debug_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.debug_file = Some(path.into());
        self
    }

    #[must_use]
    pub fn debug_filter(mut self, filter: impl Into<String>) -> Self {
        self.debug_filter = Some(filter.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.verbosity.is_none() && self.debug_file.is_none() && self.debug_filter.is_none()
    }

    /// Read options from `PYTR_LOG_LEVEL`, `PYTR_DEBUG_FILE` and `PYTR_DEBUG_FILTER`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read options through an arbitrary variable lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let verbosity = match get(ENV_LOG_LEVEL) {
            Some(raw) => Some(
                raw.parse::<LogLevel>()
                    .map_err(|message| LoggerError::config(ENV_LOG_LEVEL, message))?,
            ),
            None => None,
        };

        Ok(Self {
            verbosity,
            debug_file: get(ENV_DEBUG_FILE).map(PathBuf::from),
            debug_filter: get(ENV_DEBUG_FILTER),
        })
    }
}
