//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments shared by every command that scans a course
#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// Course folder; prompted for on stdin when omitted
    pub path: Option<PathBuf>,

    /// Visit chapters in name order instead of directory listing order
    #[arg(long)]
    pub sort: bool,

    /// Maximum number of chapters to collect
    #[arg(long)]
    pub max_chapters: Option<usize>,

    /// Maximum length in bytes of a chapter or video path
    #[arg(long)]
    pub max_path_len: Option<usize>,

    /// Seconds to wait for a single ffprobe call
    #[arg(long, value_name = "SECS")]
    pub probe_timeout: Option<u64>,

    /// Path to the ffprobe executable
    #[arg(long, value_name = "PATH")]
    pub ffprobe: Option<String>,

    /// Treat symlinked chapter folders and videos as ordinary entries to skip
    #[arg(long)]
    pub no_follow_symlinks: bool,
}

/// Arguments for the report command
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Report format (html, json, yaml, text)
    #[arg(short, long)]
    pub format: Option<String>,

    /// HTML colour theme (light, dark)
    #[arg(long)]
    pub theme: Option<String>,

    /// Output file (default: progress_report.<ext> in the working directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the summary command
#[derive(Args, Debug, Clone, Default)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
