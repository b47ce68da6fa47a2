// Report interactor - Renders an aggregation result and writes the artifact

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Local;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::output::{ProgressReport, ReportRenderer};
use crate::ports::*;

/// Interactor for the report generation use case
pub struct ReportInteractor {
    fs_port: Arc<dyn FsPort>,
    log_port: Arc<dyn LogPort>,
}

impl ReportInteractor {
    /// Create new report interactor with injected ports
    pub fn new(fs_port: Arc<dyn FsPort>, log_port: Arc<dyn LogPort>) -> Self {
        Self { fs_port, log_port }
    }

    /// Render the progress with the current local time as the timestamp
    pub fn render(
        &self,
        progress: &CourseProgress,
        renderer: &ReportRenderer,
    ) -> Result<(ProgressReport, String), DomainError> {
        let report = ProgressReport::new(progress, Local::now());
        let contents = renderer.render(&report)?;
        Ok((report, contents))
    }

    /// Render the progress and write it to `output_path`
    pub async fn write_report(
        &self,
        progress: &CourseProgress,
        renderer: &ReportRenderer,
        output_path: &Path,
    ) -> Result<ReportOutcome, DomainError> {
        let (report, contents) = self.render(progress, renderer)?;

        self.log_port
            .debug(&format!(
                "Writing {} report ({} bytes) to {}",
                renderer.format(),
                contents.len(),
                output_path.display()
            ))
            .await;

        if let Err(e) = self
            .fs_port
            .write_file_atomic(output_path, contents.as_bytes())
            .await
        {
            let error = DomainError::ReportWriteFailure(format!("{}: {}", output_path.display(), e));
            self.log_port.error(&error.to_string()).await;
            return Err(error);
        }

        self.log_port
            .info(&format!("Report written to {}", output_path.display()))
            .await;

        Ok(ReportOutcome {
            path: output_path.to_path_buf(),
            headline: report.headline(),
        })
    }
}

/// Where the report went and what it says in one line
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    pub path: PathBuf,
    pub headline: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{StdFsAdapter, TracingLogAdapter};
    use tempfile::TempDir;

    fn sample_progress() -> CourseProgress {
        let mut progress = CourseProgress::new("/course");
        progress.push_chapter(Chapter::new("01 [DONE]", 30.0)).unwrap();
        progress.push_chapter(Chapter::new("02", 90.0)).unwrap();
        progress
    }

    fn interactor() -> ReportInteractor {
        ReportInteractor::new(
            Arc::new(StdFsAdapter::new(true).unwrap()),
            Arc::new(TracingLogAdapter::new().unwrap()),
        )
    }

    #[tokio::test]
    async fn test_write_report() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("progress_report.html");
        let renderer = ReportRenderer::new(ReportFormat::Html, Theme::Light);

        let outcome = interactor()
            .write_report(&sample_progress(), &renderer, &output)
            .await
            .unwrap();

        assert_eq!(outcome.path, output);
        assert_eq!(outcome.headline, "25.0% complete (00:00:30 of 00:02:00, 00:01:30 remaining; 1 of 2 chapters done)");
        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("Overall Progress: 25.0%"));
    }

    #[tokio::test]
    async fn test_write_failure_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("missing/dir/report.json");
        let renderer = ReportRenderer::new(ReportFormat::Json, Theme::Light);

        let result = interactor()
            .write_report(&sample_progress(), &renderer, &output)
            .await;

        assert!(matches!(result, Err(DomainError::ReportWriteFailure(_))));
    }
}
