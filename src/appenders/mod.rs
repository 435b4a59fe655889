//! Appender implementations

pub mod console;
pub mod file;

pub use console::{ConsoleAppender, ConsoleStream};
pub use file::FileAppender;

// Appender trait re-exported for implementors
pub use crate::core::{Appender, SharedAppender};
