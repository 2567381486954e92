use std::io;

use thiserror::Error;

/// Library-wide error type for repomirror operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// One or more required environment variables are unset or empty.
    #[error("Required environment variables are not set: {}", .0.join(", "))]
    MissingEnvironment(Vec<String>),

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// The HTTP request could not be completed.
    #[error("HTTP request to {url} failed: {details}")]
    Http { url: String, details: String },

    /// The remote API answered with a status we do not accept.
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Input rejected before any external call was made.
    #[error("{reason}")]
    Validation { reason: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers that only care about the category.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::MissingEnvironment(_)
            | AppError::ParseError { .. }
            | AppError::Validation { .. } => io::ErrorKind::InvalidInput,
            AppError::Http { .. } | AppError::UnexpectedStatus { .. } => {
                io::ErrorKind::ConnectionRefused
            }
            AppError::GitError { .. } => io::ErrorKind::Other,
        }
    }
}
