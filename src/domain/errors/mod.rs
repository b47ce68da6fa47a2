// Domain errors - Error types for the domain layer

use std::fmt;

/// Domain-specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Course root cannot be opened as a directory
    CourseNotFound(String),
    /// A chapter directory cannot be listed
    ChapterUnreadable(String),
    /// Duration probe produced nothing usable
    ProbeFailure(String),
    /// Constructed path exceeds the configured limit
    PathTooLong(String),
    /// No measurable video content anywhere in the course
    NoVideosFound(String),
    /// Report artifact cannot be created
    ReportWriteFailure(String),
    /// File system operation failed
    FsFail(String),
    /// Invalid arguments provided
    BadArgs(String),
    /// Internal error
    InternalError(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::CourseNotFound(msg) => write!(f, "Course folder not found: {}", msg),
            DomainError::ChapterUnreadable(msg) => write!(f, "Chapter unreadable: {}", msg),
            DomainError::ProbeFailure(msg) => write!(f, "Probe failure: {}", msg),
            DomainError::PathTooLong(msg) => write!(f, "Path too long: {}", msg),
            DomainError::NoVideosFound(msg) => write!(f, "No video files found: {}", msg),
            DomainError::ReportWriteFailure(msg) => write!(f, "Failed to write report: {}", msg),
            DomainError::FsFail(msg) => write!(f, "File system error: {}", msg),
            DomainError::BadArgs(msg) => write!(f, "Bad arguments: {}", msg),
            DomainError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
