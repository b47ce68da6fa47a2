//! Configuration initialization and hierarchy management

use std::path::Path;

use tracing::debug;

use crate::adapters::toml_config::CONFIG_KEYS;
use crate::adapters::{AppConfig, TomlConfigAdapter};
use crate::cli::{Cli, Commands, ScanArgs};
use crate::error::{CourseProgressError, CourseProgressResult};

/// Prefix of the environment variables that override config keys
pub const ENV_PREFIX: &str = "COURSE_PROGRESS_";

/// Build the effective configuration following precedence: CLI > Env > File > Defaults
pub fn initialize_configuration_hierarchy(cli: &Cli) -> CourseProgressResult<AppConfig> {
    let mut config = load_config_file(cli.config.as_deref())?;
    apply_environment_overrides(&mut config, |name| std::env::var(name).ok())?;
    apply_cli_overrides(&mut config, cli)?;

    config
        .validate()
        .map_err(|e| CourseProgressError::InvalidConfig {
            message: e.to_string(),
        })?;

    Ok(config)
}

/// Load the explicit config file, or the first default location that exists
pub fn load_config_file(explicit: Option<&Path>) -> CourseProgressResult<AppConfig> {
    let path = match explicit {
        Some(path) if !path.is_file() => {
            return Err(CourseProgressError::ConfigNotFound {
                path: path.display().to_string(),
            })
        }
        Some(path) => Some(path.to_path_buf()),
        None => TomlConfigAdapter::find_default_file(),
    };

    match path {
        Some(path) => {
            debug!("Loading configuration from: {}", path.display());
            TomlConfigAdapter::load_file(&path).map_err(|e| CourseProgressError::InvalidConfig {
                message: e.to_string(),
            })
        }
        None => Ok(AppConfig::default()),
    }
}

/// Apply `COURSE_PROGRESS_<KEY>` variables found through `lookup`
pub fn apply_environment_overrides<F>(config: &mut AppConfig, lookup: F) -> CourseProgressResult<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let mut overrides = 0;
    for key in CONFIG_KEYS {
        let name = format!("{}{}", ENV_PREFIX, key.to_uppercase());
        if let Some(value) = lookup(&name) {
            debug!("Found environment override: {} = {}", name, value);
            config
                .set(key, &value)
                .map_err(|e| CourseProgressError::InvalidConfig {
                    message: format!("{}: {}", name, e),
                })?;
            overrides += 1;
        }
    }
    Ok(overrides)
}

/// Apply command-line flags on top of everything else
pub fn apply_cli_overrides(config: &mut AppConfig, cli: &Cli) -> CourseProgressResult<usize> {
    let mut overrides = 0;

    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
        overrides += 1;
    }
    if let Some(format) = &cli.log_format {
        config.log_format = format.clone();
        overrides += 1;
    }

    match &cli.command {
        Commands::Report(args) => {
            overrides += apply_scan_overrides(config, &args.scan);
            if let Some(format) = &args.format {
                config.report_format = format.clone();
                overrides += 1;
            }
            if let Some(theme) = &args.theme {
                config.theme = theme.clone();
                overrides += 1;
            }
            if let Some(output) = &args.output {
                config.report_path = Some(output.display().to_string());
                overrides += 1;
            }
        }
        Commands::Summary(args) => {
            overrides += apply_scan_overrides(config, &args.scan);
        }
        Commands::Config => {}
    }

    if overrides > 0 {
        debug!("Applied {} CLI configuration overrides", overrides);
    }
    Ok(overrides)
}

fn apply_scan_overrides(config: &mut AppConfig, scan: &ScanArgs) -> usize {
    let mut overrides = 0;
    if scan.sort {
        config.sort_chapters = true;
        overrides += 1;
    }
    if let Some(max_chapters) = scan.max_chapters {
        config.max_chapters = max_chapters;
        overrides += 1;
    }
    if let Some(max_path_len) = scan.max_path_len {
        config.max_path_len = max_path_len;
        overrides += 1;
    }
    if let Some(timeout) = scan.probe_timeout {
        config.probe_timeout_secs = timeout;
        overrides += 1;
    }
    if let Some(ffprobe) = &scan.ffprobe {
        config.ffprobe_path = ffprobe.clone();
        overrides += 1;
    }
    if scan.no_follow_symlinks {
        config.follow_symlinks = false;
        overrides += 1;
    }
    overrides
}
