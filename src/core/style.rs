//! Console color scheme
//!
//! Two tables drive the console colors: field styles decorate the structural
//! parts of a line (timestamp, logger name, level label, ...) and level
//! styles decorate the message text according to the record's severity.

use super::log_level::LogLevel;
use colored::{Color, ColoredString, Colorize};

/// A terminal style: optional foreground color plus weight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub color: Option<Color>,
    pub bold: bool,
    pub faint: bool,
}

impl Style {
    pub const fn plain() -> Self {
        Self {
            color: None,
            bold: false,
            faint: false,
        }
    }

    pub const fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            bold: false,
            faint: false,
        }
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn faint(mut self) -> Self {
        self.faint = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        self.color.is_none() && !self.bold && !self.faint
    }

    pub fn apply(&self, text: &str) -> ColoredString {
        let mut styled = match self.color {
            Some(color) => text.color(color),
            None => text.normal(),
        };
        if self.bold {
            styled = styled.bold();
        }
        if self.faint {
            styled = styled.dimmed();
        }
        styled
    }
}

/// Structural parts of a formatted record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Asctime,
    Hostname,
    Levelname,
    Name,
    Programname,
    Username,
}

/// The full color scheme of the console appender
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    fields: [(Field, Style); 6],
    levels: [(LogLevel, Style); 9],
}

impl StyleSheet {
    pub fn field(&self, field: Field) -> Style {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, style)| *style)
            .unwrap_or_default()
    }

    pub fn level(&self, level: LogLevel) -> Style {
        self.levels
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, style)| *style)
            .unwrap_or_default()
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            fields: [
                (Field::Asctime, Style::color(Color::Green)),
                (Field::Hostname, Style::color(Color::Magenta)),
                (Field::Levelname, Style::color(Color::Red).bold()),
                (Field::Name, Style::color(Color::Magenta)),
                (Field::Programname, Style::color(Color::Cyan)),
                (Field::Username, Style::color(Color::Yellow)),
            ],
            levels: [
                (LogLevel::Critical, Style::color(Color::Red).bold()),
                (LogLevel::Debug, Style::color(Color::Green)),
                (LogLevel::Error, Style::color(Color::Red)),
                (LogLevel::Info, Style::plain()),
                (LogLevel::Notice, Style::color(Color::Magenta)),
                (LogLevel::Spam, Style::color(Color::Green).faint()),
                (LogLevel::Success, Style::color(Color::Green).bold()),
                (LogLevel::Verbose, Style::color(Color::Blue)),
                (LogLevel::Warning, Style::color(Color::Yellow)),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_styles() {
        let sheet = StyleSheet::default();
        assert_eq!(sheet.level(LogLevel::Critical), Style::color(Color::Red).bold());
        assert_eq!(sheet.level(LogLevel::Success), Style::color(Color::Green).bold());
        assert_eq!(sheet.level(LogLevel::Warning), Style::color(Color::Yellow));
        assert_eq!(sheet.level(LogLevel::Spam), Style::color(Color::Green).faint());
        assert_eq!(sheet.level(LogLevel::Verbose), Style::color(Color::Blue));
        assert_eq!(sheet.level(LogLevel::Notice), Style::color(Color::Magenta));
        assert!(sheet.level(LogLevel::Info).is_plain());
    }

    #[test]
    fn test_field_styles() {
        let sheet = StyleSheet::default();
        assert_eq!(sheet.field(Field::Asctime), Style::color(Color::Green));
        assert_eq!(sheet.field(Field::Levelname), Style::color(Color::Red).bold());
        assert_eq!(sheet.field(Field::Programname), Style::color(Color::Cyan));
        assert_eq!(sheet.field(Field::Username), Style::color(Color::Yellow));
    }

    #[test]
    fn test_every_level_has_a_style_entry() {
        let sheet = StyleSheet::default();
        for level in LogLevel::ALL {
            assert!(sheet.levels.iter().any(|(l, _)| *l == level), "{level}");
        }
    }
}
