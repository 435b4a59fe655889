//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry, log_level::LogLevel};
use parking_lot::Mutex;
use std::sync::Arc;

pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;

    /// Records below this level are skipped by the logger
    fn min_level(&self) -> LogLevel {
        LogLevel::lowest()
    }
}

/// An appender that several loggers write to.
///
/// Identity is the allocation: two handles are "the same sink" when they
/// point at the same `Arc`.
pub type SharedAppender = Arc<Mutex<Box<dyn Appender>>>;

pub fn share(appender: impl Appender + 'static) -> SharedAppender {
    let boxed: Box<dyn Appender> = Box::new(appender);
    Arc::new(Mutex::new(boxed))
}
