// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::errors::DomainError;
use crate::domain::rules::{percentage, ChapterClassifier};

/// One chapter folder with measurable video content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chapter {
    pub name: String,
    pub duration_seconds: f64,
    pub is_done: bool,
}

impl Chapter {
    /// Create a chapter, deriving the done flag from its folder name
    pub fn new(name: impl Into<String>, duration_seconds: f64) -> Self {
        let name = name.into();
        let is_done = ChapterClassifier::is_done(&name);
        Self {
            name,
            duration_seconds,
            is_done,
        }
    }

    /// Status label used by the report
    pub fn status(&self) -> &'static str {
        if self.is_done {
            "done"
        } else {
            "pending"
        }
    }
}

/// Why an entry was left out of the aggregation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    ChapterUnreadable(String),
    PathTooLong(usize),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::ChapterUnreadable(msg) => write!(f, "unreadable: {}", msg),
            SkipReason::PathTooLong(len) => write!(f, "path too long ({} bytes)", len),
        }
    }
}

/// Entry skipped during a pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Result of one aggregation pass over a course folder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseProgress {
    pub course_path: PathBuf,
    pub total_duration_seconds: f64,
    pub completed_duration_seconds: f64,
    pub chapters: Vec<Chapter>,
    pub skipped: Vec<SkippedEntry>,
}

impl CourseProgress {
    /// Start an empty result for the given course root
    pub fn new(course_path: impl AsRef<Path>) -> Self {
        Self {
            course_path: course_path.as_ref().to_path_buf(),
            total_duration_seconds: 0.0,
            completed_duration_seconds: 0.0,
            chapters: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Append a chapter and fold its duration into the totals.
    ///
    /// Chapters without a positive duration are rejected so that the
    /// sequence only ever holds chapters with measurable content.
    pub fn push_chapter(&mut self, chapter: Chapter) -> Result<(), DomainError> {
        if !(chapter.duration_seconds > 0.0) || !chapter.duration_seconds.is_finite() {
            return Err(DomainError::InternalError(format!(
                "Chapter '{}' has no measurable duration",
                chapter.name
            )));
        }

        self.total_duration_seconds += chapter.duration_seconds;
        if chapter.is_done {
            self.completed_duration_seconds += chapter.duration_seconds;
        }
        self.chapters.push(chapter);
        Ok(())
    }

    /// Record an entry the pass had to leave out
    pub fn record_skip(&mut self, path: impl Into<PathBuf>, reason: SkipReason) {
        self.skipped.push(SkippedEntry {
            path: path.into(),
            reason,
        });
    }

    /// Seconds still to watch
    pub fn remaining_seconds(&self) -> f64 {
        (self.total_duration_seconds - self.completed_duration_seconds).max(0.0)
    }

    /// Completed share of the total runtime, in percent
    pub fn percentage(&self) -> f64 {
        percentage(self.completed_duration_seconds, self.total_duration_seconds)
    }

    /// Number of chapters marked done
    pub fn done_chapters(&self) -> usize {
        self.chapters.iter().filter(|c| c.is_done).count()
    }
}

/// Output format of the rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Html,
    Json,
    Yaml,
    Text,
}

impl ReportFormat {
    /// Parse report format from string
    pub fn parse(format_str: &str) -> Result<Self, DomainError> {
        match format_str.trim().to_lowercase().as_str() {
            "html" => Ok(ReportFormat::Html),
            "json" => Ok(ReportFormat::Json),
            "yaml" | "yml" => Ok(ReportFormat::Yaml),
            "text" | "txt" => Ok(ReportFormat::Text),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid report format: {}. Valid formats: html, json, yaml, text",
                format_str
            ))),
        }
    }

    /// File extension for the default report name
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
            ReportFormat::Yaml => "yaml",
            ReportFormat::Text => "txt",
        }
    }

    /// Well-known report file name in the working directory
    pub fn default_file_name(&self) -> String {
        format!("progress_report.{}", self.extension())
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
            ReportFormat::Yaml => "yaml",
            ReportFormat::Text => "text",
        };
        write!(f, "{}", name)
    }
}

/// Colour theme for the HTML report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse theme from string
    pub fn parse(theme_str: &str) -> Result<Self, DomainError> {
        match theme_str.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid theme: {}. Valid themes: light, dark",
                theme_str
            ))),
        }
    }
}
