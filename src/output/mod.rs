//! Report view model and rendering

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::model::{CourseProgress, SkippedEntry};
use crate::domain::rules::{format_hms, round_to_tenth};

pub mod renderer;

pub use renderer::ReportRenderer;

/// Timestamp layout shown in reports
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the chapter table
#[derive(Debug, Clone, Serialize)]
pub struct ChapterRow {
    pub name: String,
    pub duration: String,
    pub duration_seconds: f64,
    pub done: bool,
}

/// Everything a report shows, already formatted
#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    pub course_path: String,
    /// Overall percentage rounded to one decimal
    pub percentage: f64,
    pub completed: String,
    pub remaining: String,
    pub total: String,
    pub completed_seconds: f64,
    pub total_seconds: f64,
    pub chapters: Vec<ChapterRow>,
    pub chapters_done: usize,
    pub skipped: Vec<SkippedEntry>,
    pub generated_at: String,
}

impl ProgressReport {
    /// Build the report view from an aggregation result
    pub fn new(progress: &CourseProgress, generated_at: DateTime<Local>) -> Self {
        let chapters = progress
            .chapters
            .iter()
            .map(|chapter| ChapterRow {
                name: chapter.name.clone(),
                duration: format_hms(chapter.duration_seconds),
                duration_seconds: chapter.duration_seconds,
                done: chapter.is_done,
            })
            .collect();

        Self {
            course_path: progress.course_path.display().to_string(),
            percentage: round_to_tenth(progress.percentage()),
            completed: format_hms(progress.completed_duration_seconds),
            remaining: format_hms(progress.remaining_seconds()),
            total: format_hms(progress.total_duration_seconds),
            completed_seconds: progress.completed_duration_seconds,
            total_seconds: progress.total_duration_seconds,
            chapters,
            chapters_done: progress.done_chapters(),
            skipped: progress.skipped.clone(),
            generated_at: generated_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// One-line summary for the terminal
    pub fn headline(&self) -> String {
        format!(
            "{:.1}% complete ({} of {}, {} remaining; {} of {} chapters done)",
            self.percentage,
            self.completed,
            self.total,
            self.remaining,
            self.chapters_done,
            self.chapters.len()
        )
    }
}
