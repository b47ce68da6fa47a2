//! Error handling module for the application shell

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Errors raised outside the domain: configuration, input and wiring
#[derive(Error, Debug)]
pub enum CourseProgressError {
    /// Explicit config file is missing
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// Configuration value rejected
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Course path could not be read from the prompt
    #[error("Could not read course path: {message}")]
    InputError { message: String },

    /// Domain error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for application shell operations
pub type CourseProgressResult<T> = std::result::Result<T, CourseProgressError>;
