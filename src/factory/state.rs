//! Process-wide logging configuration
//!
//! Three slots, each assignable once: verbosity, the shared debug file sink
//! and the debug filter. A call that tries to reassign any slot fails before
//! touching any of them.

use super::options::LoggerOptions;
use crate::appenders::FileAppender;
use crate::core::{appender::share, LogLevel, LoggerError, Result, SharedAppender};
use parking_lot::Mutex;
use std::collections::HashSet;

#[derive(Default)]
struct Slots {
    verbosity: Option<LogLevel>,
    debug_sink: Option<SharedAppender>,
    debug_filter: Option<HashSet<String>>,
}

#[derive(Default)]
pub struct LoggingState {
    slots: Mutex<Slots>,
}

impl LoggingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbosity(&self) -> Option<LogLevel> {
        self.slots.lock().verbosity
    }

    pub fn debug_sink(&self) -> Option<SharedAppender> {
        self.slots.lock().debug_sink.clone()
    }

    pub fn debug_filter(&self) -> Option<HashSet<String>> {
        self.slots.lock().debug_filter.clone()
    }

    /// Assign every slot the options provide.
    ///
    /// Fails with the slot's own error if it is already assigned, or with an
    /// I/O error if the debug file cannot be opened; in both cases no slot
    /// changes.
    pub fn apply(&self, options: &LoggerOptions) -> Result<()> {
        let mut slots = self.slots.lock();

        if options.verbosity.is_some() && slots.verbosity.is_some() {
            return Err(LoggerError::VerbosityAlreadySet);
        }
        if options.debug_file.is_some() && slots.debug_sink.is_some() {
            return Err(LoggerError::DebugFileAlreadyInitialized);
        }
        if options.debug_filter.is_some() && slots.debug_filter.is_some() {
            return Err(LoggerError::DebugFilterAlreadySet);
        }

        let debug_sink = match options.debug_file {
            Some(ref path) => {
                println!("Setting up debug logfile {}", path.display());
                let appender = FileAppender::new(path)?.with_min_level(LogLevel::lowest());
                Some(share(appender))
            }
            None => None,
        };

        if let Some(level) = options.verbosity {
            slots.verbosity = Some(level);
        }
        if debug_sink.is_some() {
            slots.debug_sink = debug_sink;
        }
        if let Some(ref filter) = options.debug_filter {
            slots.debug_filter = Some(parse_filter(filter));
        }
        Ok(())
    }

    /// Shared sink the named logger should write to, if any
    pub fn sink_for(&self, short_name: &str) -> Option<SharedAppender> {
        let slots = self.slots.lock();
        let sink = slots.debug_sink.as_ref()?;
        match slots.debug_filter {
            Some(ref filter) if !filter.contains(short_name) => None,
            _ => Some(sink.clone()),
        }
    }
}

/// Split a comma separated list of short logger names
pub fn parse_filter(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_each_slot_assigns_once() {
        let state = LoggingState::new();
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        state
            .apply(&LoggerOptions::new().verbosity(LogLevel::Info))
            .expect("first verbosity");
        assert!(matches!(
            state.apply(&LoggerOptions::new().verbosity(LogLevel::Debug)),
            Err(LoggerError::VerbosityAlreadySet)
        ));
        assert_eq!(state.verbosity(), Some(LogLevel::Info));

        state
            .apply(&LoggerOptions::new().debug_file(temp_dir.path().join("a.log")))
            .expect("first debug file");
        assert!(matches!(
            state.apply(&LoggerOptions::new().debug_file(temp_dir.path().join("b.log"))),
            Err(LoggerError::DebugFileAlreadyInitialized)
        ));
        assert!(!temp_dir.path().join("b.log").exists());

        state
            .apply(&LoggerOptions::new().debug_filter("api"))
            .expect("first filter");
        assert!(matches!(
            state.apply(&LoggerOptions::new().debug_filter("timeline")),
            Err(LoggerError::DebugFilterAlreadySet)
        ));
        assert_eq!(state.debug_filter(), Some(parse_filter("api")));
    }

    #[test]
    fn test_empty_options_never_fail() {
        let state = LoggingState::new();
        state
            .apply(&LoggerOptions::new().verbosity(LogLevel::Debug).debug_filter("api"))
            .expect("first call");
        for _ in 0..3 {
            state.apply(&LoggerOptions::new()).expect("empty call");
        }
        assert_eq!(state.verbosity(), Some(LogLevel::Debug));
    }

    #[test]
    fn test_failed_call_assigns_nothing() {
        let state = LoggingState::new();
        state
            .apply(&LoggerOptions::new().debug_filter("api"))
            .expect("first filter");

        let err = state
            .apply(
                &LoggerOptions::new()
                    .verbosity(LogLevel::Debug)
                    .debug_filter("timeline"),
            )
            .unwrap_err();
        assert!(matches!(err, LoggerError::DebugFilterAlreadySet));
        assert_eq!(state.verbosity(), None);
    }

    #[test]
    fn test_unopenable_file_assigns_nothing() {
        let state = LoggingState::new();
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let bad = temp_dir.path().join("missing").join("debug.log");

        let err = state
            .apply(&LoggerOptions::new().verbosity(LogLevel::Debug).debug_file(bad))
            .unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert_eq!(state.verbosity(), None);
        assert!(state.debug_sink().is_none());
    }

    #[test]
    fn test_sink_for_respects_filter() {
        let state = LoggingState::new();
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        assert!(state.sink_for("api").is_none());

        state
            .apply(&LoggerOptions::new().debug_file(temp_dir.path().join("debug.log")))
            .expect("debug file");
        assert!(state.sink_for("api").is_some());
        assert!(state.sink_for("timeline").is_some());

        state
            .apply(&LoggerOptions::new().debug_filter("api, utils"))
            .expect("filter");
        assert!(state.sink_for("api").is_some());
        assert!(state.sink_for("utils").is_some());
        assert!(state.sink_for("timeline").is_none());
    }

    #[test]
    fn test_parse_filter() {
        let filter = parse_filter("api, timeline,,utils ");
        assert_eq!(filter.len(), 3);
        assert!(filter.contains("api"));
        assert!(filter.contains("timeline"));
        assert!(filter.contains("utils"));
        assert!(parse_filter("").is_empty());
    }
}
