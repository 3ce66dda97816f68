//! Shared error type across erratic crates.

use thiserror::Error;

/// Stable error classification (used in logs and tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rate file missing or unwritable.
    Io,
    /// Stored rate or percent input is not a number.
    Parse,
    /// Percent input outside the accepted range.
    Validation,
    /// Invalid configuration.
    Config,
    /// Fatal startup failure.
    Startup,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Io => "IO",
            ErrorKind::Parse => "PARSE",
            ErrorKind::Validation => "VALIDATION",
            ErrorKind::Config => "CONFIG",
            ErrorKind::Startup => "STARTUP",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ErraticError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum ErraticError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse: {0}")]
    Parse(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("config: {0}")]
    Config(String),
    #[error("startup: {0}")]
    Startup(String),
}

impl ErraticError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErraticError::Io(_) => ErrorKind::Io,
            ErraticError::Parse(_) => ErrorKind::Parse,
            ErraticError::Validation(_) => ErrorKind::Validation,
            ErraticError::Config(_) => ErrorKind::Config,
            ErraticError::Startup(_) => ErrorKind::Startup,
        }
    }
}
