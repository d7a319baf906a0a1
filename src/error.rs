//! Custom error types for actual-cli
//!
//! Every failure an invocation can hit is one of these variants. The
//! dispatcher turns them into the `{"error": ...}` payload written to stderr.

use thiserror::Error;

/// The main error type for actual-cli operations
#[derive(Error, Debug)]
pub enum ActualError {
    /// A required setting could not be resolved
    #[error("{0}")]
    Config(String),

    /// Bad or missing command-line input
    #[error("{0}")]
    Validation(String),

    /// Entity lookup by name failed
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Malformed CSV input
    #[error("{0}")]
    Format(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Anything surfaced by the budget service, including transport failures
    #[error("{0}")]
    Service(String),

    /// The command name is not in the command table
    #[error("Unknown command: {command}")]
    UnknownCommand {
        command: String,
        available: Vec<&'static str>,
    },
}

/// Broad error category, used in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Validation,
    Service,
}

impl ActualError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Error for a flag that was not given a value
    pub fn missing_flag(name: &str, placeholder: &str) -> Self {
        Self::Validation(format!("--{} <{}> is required", name, placeholder))
    }

    /// Which of the three failure categories this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Config,
            Self::Validation(_)
            | Self::NotFound { .. }
            | Self::Format(_)
            | Self::UnknownCommand { .. } => ErrorKind::Validation,
            Self::Io(_) | Self::Json(_) | Self::Service(_) => ErrorKind::Service,
        }
    }
}

impl From<std::io::Error> for ActualError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ActualError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for ActualError {
    fn from(err: reqwest::Error) -> Self {
        Self::Service(err.to_string())
    }
}

/// Result type alias for actual-cli operations
pub type ActualResult<T> = Result<T, ActualError>;
