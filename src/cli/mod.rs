//! CLI module for course-progress
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

pub use args::{ReportArgs, ScanArgs, SummaryArgs};

/// Course Progress
///
/// Scans a course folder (one subfolder per chapter, videos inside) and
/// reports how much of its runtime is marked done with `[DONE]`.
#[derive(Parser, Debug)]
#[command(name = "course-progress")]
#[command(about = "Course Progress - Track how much of a video course you have watched")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Config file (default: course_progress.toml or config/course_progress.toml)
    #[arg(long, global = true, env = "COURSE_PROGRESS_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log output format (pretty, json)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a course and write a progress report file
    Report(ReportArgs),
    /// Scan a course and print the progress to the terminal
    Summary(SummaryArgs),
    /// Print the effective configuration as TOML
    Config,
}
