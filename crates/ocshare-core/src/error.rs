//! Unified application error types for ocshare.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Errors coming back from the request
//! execution collaborator keep the status code the server reported so the
//! share manager can surface it verbatim.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The request collaborator reported a non-success status.
    Transport,
    /// Link share creation was refused because a password is required.
    PasswordRequired,
    /// Updating a link share password failed.
    PasswordUpdate,
    /// A successful reply was missing required fields or was malformed.
    Parse,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// The local sync layer rejected an operation.
    Sync,
    /// An internal error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => write!(f, "TRANSPORT"),
            Self::PasswordRequired => write!(f, "PASSWORD_REQUIRED"),
            Self::PasswordUpdate => write!(f, "PASSWORD_UPDATE"),
            Self::Parse => write!(f, "PARSE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Sync => write!(f, "SYNC"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout ocshare.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// Status code reported by the server, when there is one.
    pub status_code: Option<i32>,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status_code: None,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            status_code: None,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a transport error carrying the status code the server reported.
    pub fn transport(status_code: i32, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Transport,
            status_code: Some(status_code),
            message: message.into(),
            source: None,
        }
    }

    /// Create a password-required error.
    pub fn password_required(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::PasswordRequired,
            status_code: Some(403),
            message: message.into(),
            source: None,
        }
    }

    /// Create a password-update error.
    pub fn password_update(status_code: i32, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::PasswordUpdate,
            status_code: Some(status_code),
            message: message.into(),
            source: None,
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create a sync error.
    pub fn sync(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Sync, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Status code to report for this error. Errors that never reached the
    /// server report `0`.
    pub fn code(&self) -> i32 {
        self.status_code.unwrap_or(0)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            status_code: self.status_code,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Invalid URL: {err}"),
            err,
        )
    }
}
