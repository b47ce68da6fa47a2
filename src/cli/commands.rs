//! Command implementations

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::adapters::{AppConfig, TomlConfigAdapter};
use crate::app::container::{AppContainer, DefaultAppContainer};
use crate::cli::args::{ReportArgs, SummaryArgs};
use crate::domain::model::{ReportFormat, Theme};
use crate::error::{CourseProgressError, CourseProgressResult};
use crate::output::ReportRenderer;

/// Prompt shown when no course path is given on the command line
pub const COURSE_PATH_PROMPT: &str = "Enter the path to your course folder: ";

/// Stream the course path prompt is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStream {
    Stdout,
    /// Keeps stdout free for machine-readable output
    Stderr,
}

/// Execute the report command
pub async fn report(args: &ReportArgs, config: &AppConfig) -> Result<()> {
    let course_path = resolve_course_path(args.scan.path.as_deref(), PromptStream::Stdout)?;
    info!("Starting report for: {}", course_path.display());

    let container = DefaultAppContainer::new(config).context("Failed to initialize adapters")?;
    let progress = container
        .progress_interactor()
        .aggregate(&course_path)
        .await
        .context("Failed to measure course progress")?;

    if !progress.skipped.is_empty() {
        warn!("{} entries were skipped, see the report for details", progress.skipped.len());
    }

    let renderer = ReportRenderer::new(config.report_format()?, config.theme()?);
    let output_path = config.report_path()?;
    let outcome = container
        .report_interactor()
        .write_report(&progress, &renderer, &output_path)
        .await
        .context("Failed to generate report")?;

    println!("Report generated: {}", outcome.path.display());
    println!("{}", outcome.headline);
    Ok(())
}

/// Execute the summary command
pub async fn summary(args: &SummaryArgs, config: &AppConfig) -> Result<()> {
    let prompt = if args.json {
        PromptStream::Stderr
    } else {
        PromptStream::Stdout
    };
    let course_path = resolve_course_path(args.scan.path.as_deref(), prompt)?;
    info!("Starting summary for: {}", course_path.display());

    let container = DefaultAppContainer::new(config).context("Failed to initialize adapters")?;
    let progress = container
        .progress_interactor()
        .aggregate(&course_path)
        .await
        .context("Failed to measure course progress")?;

    let format = if args.json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };
    let renderer = ReportRenderer::new(format, Theme::default());
    let (_, rendered) = container
        .report_interactor()
        .render(&progress, &renderer)
        .context("Failed to render summary")?;

    print!("{}", rendered);
    Ok(())
}

/// Execute the config command
pub fn show_config(config: &AppConfig) -> Result<()> {
    let rendered = TomlConfigAdapter::serialize(config)?;
    print!("{}", rendered);
    Ok(())
}

/// Use the given path or ask for one on stdin
pub fn resolve_course_path(path: Option<&Path>, prompt: PromptStream) -> CourseProgressResult<PathBuf> {
    match (path, prompt) {
        (Some(path), _) => Ok(path.to_path_buf()),
        (None, PromptStream::Stdout) => prompt_course_path(io::stdin().lock(), io::stdout().lock()),
        (None, PromptStream::Stderr) => prompt_course_path(io::stdin().lock(), io::stderr().lock()),
    }
}

/// Print the prompt and read one line as the course path
pub fn prompt_course_path<R: BufRead, W: Write>(mut input: R, mut output: W) -> CourseProgressResult<PathBuf> {
    write!(output, "{}", COURSE_PATH_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(CourseProgressError::InputError {
            message: "no input received".to_string(),
        });
    }

    let path = line.trim_end_matches(['\r', '\n']);
    if path.trim().is_empty() {
        return Err(CourseProgressError::InputError {
            message: "course path is empty".to_string(),
        });
    }

    Ok(PathBuf::from(path))
}
