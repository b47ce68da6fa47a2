//! Course Progress Library
//!
//! Measures how much of a video course has been watched. A course is a folder
//! with one subfolder per chapter; chapters whose name contains `[DONE]` count
//! as completed. Video durations come from `ffprobe`.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod output;
pub mod ports;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{Chapter, CourseProgress, ReportFormat, SkipReason, SkippedEntry, Theme};
pub use domain::rules::{format_hms, percentage};
pub use error::{CourseProgressError, CourseProgressResult};
