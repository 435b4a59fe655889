//! File appender implementation

use crate::core::{Appender, LogEntry, LogLevel, LoggerError, Result, TimestampFormat};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends `timestamp - logger_name - LEVEL - message` lines to a file.
///
/// Every record is flushed as soon as it is written so the file stays
/// readable while the process is still running.
pub struct FileAppender {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    min_level: LogLevel,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;
        let writer = Some(BufWriter::new(file));

        Ok(Self {
            path,
            writer,
            min_level: LogLevel::lowest(),
        })
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("File writer not initialized"))?;

        let output = format!(
            "{} - {} - {} - {}\n",
            TimestampFormat::Millis.format(&entry.timestamp),
            entry.logger_name,
            entry.level.to_str(),
            entry.message
        );

        writer.write_all(output.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }

    fn min_level(&self) -> LogLevel {
        self.min_level
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}
