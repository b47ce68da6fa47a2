//! Course Progress CLI
//!
//! Scans a course folder and writes a progress report.
//!
//! # Usage
//!
//! ```bash
//! course-progress report "~/Courses/Rust" --format html --theme dark
//! course-progress summary "~/Courses/Rust" --json
//! course-progress report            # prompts for the course folder
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use course_progress::adapters::tracing_log::init_tracing;
use course_progress::cli::{commands, Cli, Commands};
use course_progress::config_initialization::initialize_configuration_hierarchy;

/// Main entry point for the course-progress CLI
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let config = initialize_configuration_hierarchy(&cli).context("Failed to load configuration")?;

    // Initialize logging
    init_tracing(config.log_level()?, config.log_format()?);

    info!("Starting course-progress");

    // Execute the requested command
    match &cli.command {
        Commands::Report(args) => {
            info!("Executing report command");
            commands::report(args, &config).await?;
        }
        Commands::Summary(args) => {
            info!("Executing summary command");
            commands::summary(args, &config).await?;
        }
        Commands::Config => {
            commands::show_config(&config)?;
        }
    }

    info!("course-progress completed successfully");
    Ok(())
}
