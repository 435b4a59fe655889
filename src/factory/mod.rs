//! Logger factory
//!
//! Hands out named loggers with a colorized console appender and, when one
//! has been configured, the shared debug file sink. Loggers are cached by
//! short name, so asking twice for the same name returns the same handle.
//!
//! # Examples
//!
//! ```no_run
//! use pytr_utils::{LogLevel, LoggerFactory, LoggerOptions};
//!
//! let factory = LoggerFactory::new();
//! let log = factory
//!     .get_logger(
//!         "pytr.main",
//!         LoggerOptions::new()
//!             .verbosity(LogLevel::Debug)
//!             .debug_file("pytr-debug.log")
//!             .debug_filter("main,api"),
//!     )
//!     .expect("first configuration");
//! log.info("Logged in");
//!
//! // Later calls reuse the process configuration.
//! let api = factory.logger("pytr.api");
//! api.debug("GET /portfolio");
//! ```

pub mod options;
pub mod state;

pub use options::LoggerOptions;
pub use state::{parse_filter, LoggingState};

use crate::appenders::{ConsoleAppender, ConsoleStream};
use crate::core::{LineFormat, LogLevel, Logger, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Namespace prefix removed from logger names
pub const DEFAULT_PREFIX: &str = "pytr.";

pub struct LoggerFactory {
    prefix: String,
    use_colors: bool,
    state: LoggingState,
    registry: Mutex<HashMap<String, Arc<Logger>>>,
}

impl LoggerFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            use_colors: true,
            state: LoggingState::new(),
            registry: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Factory behind the crate-level [`get_logger`](crate::get_logger) and
    /// [`check_version`](crate::check_version) functions
    pub fn global() -> &'static LoggerFactory {
        static GLOBAL: OnceLock<LoggerFactory> = OnceLock::new();
        GLOBAL.get_or_init(LoggerFactory::new)
    }

    pub fn state(&self) -> &LoggingState {
        &self.state
    }

    pub fn short_name<'a>(&self, name: &'a str) -> &'a str {
        name.strip_prefix(self.prefix.as_str()).unwrap_or(name)
    }

    /// Apply `options` to the process configuration, then return the logger
    /// for `name` configured from it.
    ///
    /// Supplying a setting that is already assigned fails with
    /// [`LoggerError::VerbosityAlreadySet`](crate::LoggerError::VerbosityAlreadySet),
    /// [`DebugFileAlreadyInitialized`](crate::LoggerError::DebugFileAlreadyInitialized)
    /// or [`DebugFilterAlreadySet`](crate::LoggerError::DebugFilterAlreadySet).
    pub fn get_logger(&self, name: &str, options: LoggerOptions) -> Result<Arc<Logger>> {
        self.state.apply(&options)?;
        Ok(self.logger(name))
    }

    /// Logger for `name` under the current configuration
    pub fn logger(&self, name: &str) -> Arc<Logger> {
        let short_name = self.short_name(name);
        let logger = {
            let mut registry = self.registry.lock();
            Arc::clone(
                registry
                    .entry(short_name.to_string())
                    .or_insert_with(|| Arc::new(Logger::new(short_name))),
            )
        };

        if let Some(sink) = self.state.sink_for(short_name) {
            logger.add_appender(sink);
        }

        let verbosity = self.state.verbosity();
        let console = ConsoleAppender::with_colors(self.use_colors)
            .with_line_format(LineFormat::for_verbosity(verbosity))
            .with_min_level(verbosity.unwrap_or(LogLevel::Info))
            .with_stream(ConsoleStream::Stderr);
        logger.set_console(Box::new(console));

        logger
    }

    /// Short names of every logger handed out so far, sorted
    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registry.lock().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}
