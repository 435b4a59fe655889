//! Named logger
//!
//! A `Logger` owns one console appender (replaced whenever the factory
//! reconfigures it) and any number of shared appenders such as the debug
//! file sink. Records are dispatched synchronously on the calling thread.
//! Loggers form no hierarchy: nothing is ever forwarded to a parent.

use super::{
    appender::{Appender, SharedAppender},
    error::Result,
    log_entry::LogEntry,
    log_level::LogLevel,
};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

pub struct Logger {
    name: String,
    level: LogLevel,
    console: Mutex<Option<Box<dyn Appender>>>,
    appenders: RwLock<Vec<SharedAppender>>,
}

impl Logger {
    /// Create a logger with the given short name and no appenders
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: LogLevel::lowest(),
            console: Mutex::new(None),
            appenders: RwLock::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Logger threshold; always the most verbose level; appenders filter.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Records are never handed to an ancestor logger.
    pub fn propagates(&self) -> bool {
        false
    }

    /// Install the console appender, replacing any previous one
    pub fn set_console(&self, appender: Box<dyn Appender>) {
        let mut console = self.console.lock();
        if let Some(mut previous) = console.take() {
            if let Err(e) = previous.flush() {
                eprintln!("[LOGGER ERROR] Console flush failed for '{}': {}", self.name, e);
            }
        }
        *console = Some(appender);
    }

    pub fn has_console(&self) -> bool {
        self.console.lock().is_some()
    }

    /// Attach a shared appender unless this exact appender is already attached.
    ///
    /// Returns `true` when the appender was newly attached.
    pub fn add_appender(&self, appender: SharedAppender) -> bool {
        let mut appenders = self.appenders.write();
        if appenders.iter().any(|a| Arc::ptr_eq(a, &appender)) {
            return false;
        }
        appenders.push(appender);
        true
    }

    pub fn has_appender(&self, appender: &SharedAppender) -> bool {
        self.appenders.read().iter().any(|a| Arc::ptr_eq(a, appender))
    }

    pub fn appender_count(&self) -> usize {
        self.appenders.read().len()
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if level < self.level {
            return;
        }

        let entry = LogEntry::new(level, self.name.as_str(), message.into());

        if let Some(console) = self.console.lock().as_mut() {
            Self::deliver(&mut **console, &entry);
        }

        for appender in self.appenders.read().iter() {
            let mut guard = appender.lock();
            Self::deliver(&mut **guard, &entry);
        }
    }

    /// Hand one record to one appender; failures are reported, not propagated
    fn deliver(appender: &mut dyn Appender, entry: &LogEntry) {
        if entry.level < appender.min_level() {
            return;
        }
        if let Err(e) = appender.append(entry) {
            eprintln!(
                "[LOGGER ERROR] Appender '{}' failed for logger '{}': {}",
                appender.name(),
                entry.logger_name,
                e
            );
        }
    }

    pub fn flush(&self) -> Result<()> {
        if let Some(console) = self.console.lock().as_mut() {
            console.flush()?;
        }
        for appender in self.appenders.read().iter() {
            appender.lock().flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn spam(&self, message: impl Into<String>) {
        self.log(LogLevel::Spam, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn verbose(&self, message: impl Into<String>) {
        self.log(LogLevel::Verbose, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn notice(&self, message: impl Into<String>) {
        self.log(LogLevel::Notice, message);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn success(&self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(LogLevel::Critical, message);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("has_console", &self.has_console())
            .field("appenders", &self.appender_count())
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush logger '{}' on drop: {}", self.name, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{appender::share, LoggerError};

    struct CaptureAppender {
        records: Arc<Mutex<Vec<LogEntry>>>,
        min_level: LogLevel,
    }

    impl Appender for CaptureAppender {
        fn append(&mut self, entry: &LogEntry) -> Result<()> {
            self.records.lock().push(entry.clone());
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "capture"
        }

        fn min_level(&self) -> LogLevel {
            self.min_level
        }
    }

    fn capture(min_level: LogLevel) -> (CaptureAppender, Arc<Mutex<Vec<LogEntry>>>) {
        let records = Arc::new(Mutex::new(Vec::new()));
        (
            CaptureAppender {
                records: Arc::clone(&records),
                min_level,
            },
            records,
        )
    }

    #[test]
    fn test_logger_is_maximally_verbose_and_isolated() {
        let logger = Logger::new("timeline");
        assert_eq!(logger.level(), LogLevel::Spam);
        assert!(!logger.propagates());
        assert!(!logger.has_console());
        assert_eq!(logger.appender_count(), 0);
    }

    #[test]
    fn test_shared_appender_attaches_once() {
        let logger = Logger::new("timeline");
        let (appender, records) = capture(LogLevel::Spam);
        let shared = share(appender);

        assert!(logger.add_appender(Arc::clone(&shared)));
        assert!(!logger.add_appender(Arc::clone(&shared)));
        assert_eq!(logger.appender_count(), 1);
        assert!(logger.has_appender(&shared));

        logger.info("once");
        assert_eq!(records.lock().len(), 1);
    }

    #[test]
    fn test_appender_threshold_filters_records() {
        let logger = Logger::new("api");
        let (appender, records) = capture(LogLevel::Info);
        logger.set_console(Box::new(appender));

        logger.spam("hidden");
        logger.debug("hidden");
        logger.info("shown");
        logger.critical("shown");

        let records = records.lock();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.message == "shown"));
        assert!(records.iter().all(|r| r.logger_name == "api"));
    }

    #[test]
    fn test_set_console_replaces_previous() {
        let logger = Logger::new("api");
        let (first, first_records) = capture(LogLevel::Spam);
        let (second, second_records) = capture(LogLevel::Spam);

        logger.set_console(Box::new(first));
        logger.set_console(Box::new(second));
        logger.warning("after replace");

        assert!(first_records.lock().is_empty());
        assert_eq!(second_records.lock().len(), 1);
    }

    #[test]
    fn test_failing_appender_does_not_block_others() {
        struct FailingAppender;

        impl Appender for FailingAppender {
            fn append(&mut self, _entry: &LogEntry) -> Result<()> {
                Err(LoggerError::writer("disk gone"))
            }

            fn flush(&mut self) -> Result<()> {
                Ok(())
            }

            fn name(&self) -> &str {
                "failing"
            }
        }

        let logger = Logger::new("api");
        let (appender, records) = capture(LogLevel::Spam);
        logger.set_console(Box::new(FailingAppender));
        logger.add_appender(share(appender));

        logger.error("still delivered");
        assert_eq!(records.lock().len(), 1);
    }
}
