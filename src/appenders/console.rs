//! Console appender implementation

use crate::core::{Appender, LineFormat, LogEntry, LogLevel, Result, StyleSheet};
use std::io::Write;

/// Terminal stream a [`ConsoleAppender`] writes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    /// Keeps log lines out of the command's data output
    #[default]
    Stderr,
}

impl ConsoleStream {
    fn write_line(self, line: &str) -> std::io::Result<()> {
        match self {
            ConsoleStream::Stdout => writeln!(std::io::stdout().lock(), "{}", line),
            ConsoleStream::Stderr => writeln!(std::io::stderr().lock(), "{}", line),
        }
    }

    fn flush(self) -> std::io::Result<()> {
        match self {
            ConsoleStream::Stdout => std::io::stdout().flush(),
            ConsoleStream::Stderr => std::io::stderr().flush(),
        }
    }
}

pub struct ConsoleAppender {
    use_colors: bool,
    line_format: LineFormat,
    styles: StyleSheet,
    min_level: LogLevel,
    stream: ConsoleStream,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            line_format: LineFormat::default(),
            styles: StyleSheet::default(),
            min_level: LogLevel::Info,
            stream: ConsoleStream::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Set the line layout for this appender
    ///
    /// # Example
    ///
    /// ```
    /// use pytr_utils::appenders::ConsoleAppender;
    /// use pytr_utils::LineFormat;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_line_format(LineFormat::Long);
    /// ```
    #[must_use]
    pub fn with_line_format(mut self, format: LineFormat) -> Self {
        self.line_format = format;
        self
    }

    #[must_use]
    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    /// Records below `level` are not printed
    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Write every level to `stream`
    #[must_use]
    pub fn with_stream(mut self, stream: ConsoleStream) -> Self {
        self.stream = stream;
        self
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }

    pub fn line_format(&self) -> LineFormat {
        self.line_format
    }

    /// Render a record exactly as it would be printed
    pub fn render(&self, entry: &LogEntry) -> String {
        let styles = self.use_colors.then_some(&self.styles);
        self.line_format.render(entry, styles)
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let output = self.render(entry);
        self.stream.write_line(&output)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stream.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }

    fn min_level(&self) -> LogLevel {
        self.min_level
    }
}
