//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Verbosity was already assigned for this process
    #[error("Verbosity has already been set.")]
    VerbosityAlreadySet,

    /// The shared debug file sink was already created
    #[error("Debug logfile handler has already been initialized.")]
    DebugFileAlreadyInitialized,

    /// The debug filter set was already assigned
    #[error("Debug log filter has already been set.")]
    DebugFilterAlreadySet,

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// True for the three "already initialized" failures of the factory
    pub fn is_reinitialization(&self) -> bool {
        matches!(
            self,
            LoggerError::VerbosityAlreadySet
                | LoggerError::DebugFileAlreadyInitialized
                | LoggerError::DebugFilterAlreadySet
        )
    }
}
