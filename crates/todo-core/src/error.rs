//! Error types for todo-helper

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for todo-helper
#[derive(Debug, Error)]
pub enum TodoError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A command argument is missing or not one of the accepted values.
    /// The message is a one-line tip meant for the user.
    #[error("{0}")]
    Usage(String),

    /// Scan root does not exist or is not a directory
    #[error("Scan root not found: {0}")]
    RootNotFound(PathBuf),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<TodoError>,
    },
}

impl TodoError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        TodoError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Check if this is a usage error (possibly wrapped in context)
    pub fn is_usage(&self) -> bool {
        match self {
            TodoError::Usage(_) => true,
            TodoError::WithContext { source, .. } => source.is_usage(),
            _ => false,
        }
    }
}

impl From<toml::de::Error> for TodoError {
    fn from(err: toml::de::Error) -> Self {
        TodoError::Toml(err.to_string())
    }
}

/// Result type alias for todo-helper
pub type Result<T> = std::result::Result<T, TodoError>;
