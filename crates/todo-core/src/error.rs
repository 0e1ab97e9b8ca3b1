//! Error types for the to-do manager.

use thiserror::Error;

/// A shared error type for every to-do operation.
///
/// Task-level variants (`InvalidId`, `TaskNotFound`, `InvalidArgument`) are
/// recoverable: the menu loop reports them and keeps running.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// The text supplied as a task id is not a number
    #[error("Invalid task id: '{input}'")]
    InvalidId { input: String },

    /// A well-formed id that matches no task
    #[error("Task not found: {id}")]
    TaskNotFound { id: i64 },

    /// An argument rejected before touching the store
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (reading the config file)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML"
        message: String,
    },
}

impl TodoError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InvalidId error
    pub fn invalid_id(input: impl Into<String>) -> Self {
        Self::InvalidId {
            input: input.into(),
        }
    }

    /// Creates a TaskNotFound error
    pub fn task_not_found(id: i64) -> Self {
        Self::TaskNotFound { id }
    }

    /// Creates an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_invalid_id(&self) -> bool {
        matches!(self, Self::InvalidId { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TaskNotFound { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for TodoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for TodoError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, TodoError>`.
pub type Result<T> = std::result::Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_errors_display() {
        assert_eq!(
            TodoError::invalid_id("abc").to_string(),
            "Invalid task id: 'abc'"
        );
        assert_eq!(TodoError::task_not_found(99).to_string(), "Task not found: 99");
    }

    #[test]
    fn test_type_checks() {
        assert!(TodoError::task_not_found(1).is_not_found());
        assert!(TodoError::invalid_id("x").is_invalid_id());
        assert!(TodoError::invalid_argument("empty").is_invalid_argument());
        assert!(!TodoError::config("bad").is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let err: TodoError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        match err {
            TodoError::Io { message } => assert!(message.contains("NotFound")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
