// Progress interactor - Orchestrates the course aggregation use case

use std::path::Path;
use std::sync::Arc;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::{ChapterClassifier, MAX_VIDEO_SECONDS};
use crate::ports::*;

/// Limits and ordering applied to one aggregation pass
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOptions {
    /// Stop after this many qualifying chapters
    pub max_chapters: usize,
    /// Skip any chapter or video path longer than this many bytes
    pub max_path_len: usize,
    /// Visit chapters and videos in name order instead of listing order
    pub sort_entries: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_chapters: 100,
            max_path_len: 4096,
            sort_entries: false,
        }
    }
}

/// Interactor for the course aggregation use case
pub struct ProgressInteractor {
    probe_port: Arc<dyn ProbePort>,
    fs_port: Arc<dyn FsPort>,
    log_port: Arc<dyn LogPort>,
    options: ScanOptions,
}

impl ProgressInteractor {
    /// Create new progress interactor with injected ports
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        fs_port: Arc<dyn FsPort>,
        log_port: Arc<dyn LogPort>,
        options: ScanOptions,
    ) -> Self {
        Self {
            probe_port,
            fs_port,
            log_port,
            options,
        }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Walk the course folder and sum chapter durations.
    ///
    /// Fails with `CourseNotFound` when the root cannot be listed and with
    /// `NoVideosFound` when nothing measurable was found. Unreadable chapters
    /// and over-long paths are skipped and recorded on the result.
    pub async fn aggregate(&self, course_path: &Path) -> Result<CourseProgress, DomainError> {
        self.log_port
            .info(&format!("Scanning course folder: {}", course_path.display()))
            .await;

        let entries = self
            .fs_port
            .list_entries(course_path)
            .await
            .map_err(|e| DomainError::CourseNotFound(format!("'{}' ({})", course_path.display(), e)))?;

        let mut chapter_dirs: Vec<DirEntryInfo> = entries
            .into_iter()
            .filter(|entry| entry.is_dir() && !ChapterClassifier::is_hidden(&entry.name))
            .collect();
        if self.options.sort_entries {
            chapter_dirs.sort_by(|a, b| a.name.cmp(&b.name));
        }

        let mut progress = CourseProgress::new(course_path);

        for dir in chapter_dirs {
            if progress.chapters.len() >= self.options.max_chapters {
                self.log_port
                    .info(&format!(
                        "Chapter limit of {} reached, ignoring remaining folders",
                        self.options.max_chapters
                    ))
                    .await;
                break;
            }

            if let Err(e) = self.check_path_len(&dir.path) {
                self.log_port.warn(&format!("{}, skipping chapter", e)).await;
                progress.record_skip(&dir.path, SkipReason::PathTooLong(path_len(&dir.path)));
                continue;
            }

            let duration = match self.chapter_duration(&dir, &mut progress).await {
                Ok(duration) => duration,
                Err(e) => {
                    self.log_port.warn(&format!("{}, skipping", e)).await;
                    progress.record_skip(&dir.path, SkipReason::ChapterUnreadable(e.to_string()));
                    continue;
                }
            };

            if duration > 0.0 {
                let chapter = Chapter::new(dir.name.clone(), duration);
                self.log_port
                    .debug(&format!(
                        "Chapter '{}': {:.3}s ({})",
                        chapter.name,
                        chapter.duration_seconds,
                        chapter.status()
                    ))
                    .await;
                progress.push_chapter(chapter)?;
            } else {
                self.log_port
                    .debug(&format!("No measurable video in '{}', leaving it out", dir.name))
                    .await;
            }
        }

        if progress.total_duration_seconds == 0.0 {
            return Err(DomainError::NoVideosFound(format!(
                "nothing measurable in '{}' or its subfolders",
                course_path.display()
            )));
        }

        self.log_port
            .info(&format!(
                "Found {} chapters, {:.1}% complete",
                progress.chapters.len(),
                progress.percentage()
            ))
            .await;

        Ok(progress)
    }

    /// Sum the probed durations of the videos directly inside a chapter
    async fn chapter_duration(
        &self,
        dir: &DirEntryInfo,
        progress: &mut CourseProgress,
    ) -> Result<f64, DomainError> {
        let entries = self
            .fs_port
            .list_entries(&dir.path)
            .await
            .map_err(|e| DomainError::ChapterUnreadable(format!("'{}' ({})", dir.path.display(), e)))?;

        let mut videos: Vec<DirEntryInfo> = entries
            .into_iter()
            .filter(|entry| entry.is_file() && ChapterClassifier::is_video_file(&entry.name))
            .collect();
        if self.options.sort_entries {
            videos.sort_by(|a, b| a.name.cmp(&b.name));
        }

        let mut total = 0.0;
        for video in videos {
            if let Err(e) = self.check_path_len(&video.path) {
                self.log_port.warn(&format!("{}, skipping video", e)).await;
                progress.record_skip(&video.path, SkipReason::PathTooLong(path_len(&video.path)));
                continue;
            }
            total += self.probe(&video.path).await;
        }

        Ok(total)
    }

    /// Probe one file; any failure or implausible value counts as zero seconds
    async fn probe(&self, file_path: &Path) -> f64 {
        match self.probe_port.probe_duration(file_path).await {
            Ok(seconds) if (0.0..=MAX_VIDEO_SECONDS).contains(&seconds) => seconds,
            Ok(seconds) => {
                self.log_port
                    .warn(&format!(
                        "Ignoring invalid duration {} for {}",
                        seconds,
                        file_path.display()
                    ))
                    .await;
                0.0
            }
            Err(e) => {
                self.log_port.warn(&e.to_string()).await;
                0.0
            }
        }
    }

    fn check_path_len(&self, path: &Path) -> Result<(), DomainError> {
        let len = path_len(path);
        if len > self.options.max_path_len {
            return Err(DomainError::PathTooLong(format!(
                "{} bytes exceeds limit of {} for {}",
                len,
                self.options.max_path_len,
                path.display()
            )));
        }
        Ok(())
    }
}

fn path_len(path: &Path) -> usize {
    path.as_os_str().len()
}
