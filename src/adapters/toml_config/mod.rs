// TOML config adapter - Configuration management using TOML files

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::errors::*;
use crate::domain::model::{ReportFormat, Theme};
use crate::ports::{LogFormat, LogLevel};

/// Table name holding the settings in a config file
pub const CONFIG_SECTION: &str = "course_progress";

/// Locations searched when no config file is given explicitly
pub const DEFAULT_CONFIG_PATHS: &[&str] = &["course_progress.toml", "config/course_progress.toml"];

/// Keys accepted in files and as `COURSE_PROGRESS_<KEY>` environment variables
pub const CONFIG_KEYS: &[&str] = &[
    "ffprobe_path",
    "probe_timeout_secs",
    "max_chapters",
    "max_path_len",
    "follow_symlinks",
    "sort_chapters",
    "report_format",
    "theme",
    "report_path",
    "log_level",
    "log_format",
];

/// Effective application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Path or name of the ffprobe executable
    pub ffprobe_path: String,
    /// Upper bound on a single probe, in seconds
    pub probe_timeout_secs: u64,
    /// Maximum number of chapters collected in one pass
    pub max_chapters: usize,
    /// Maximum byte length of a chapter or video path
    pub max_path_len: usize,
    pub follow_symlinks: bool,
    pub sort_chapters: bool,
    pub report_format: String,
    pub theme: String,
    /// Report destination; defaults to `progress_report.<ext>`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_path: Option<String>,
    pub log_level: String,
    pub log_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ffprobe_path: "ffprobe".to_string(),
            probe_timeout_secs: 30,
            max_chapters: 100,
            max_path_len: 4096,
            follow_symlinks: true,
            sort_chapters: false,
            report_format: "html".to_string(),
            theme: "light".to_string(),
            report_path: None,
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// Set a single key from its string form
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        let value = value.trim();
        match key {
            "ffprobe_path" => self.ffprobe_path = value.to_string(),
            "probe_timeout_secs" => self.probe_timeout_secs = parse_number(key, value)?,
            "max_chapters" => self.max_chapters = parse_number(key, value)?,
            "max_path_len" => self.max_path_len = parse_number(key, value)?,
            "follow_symlinks" => self.follow_symlinks = parse_bool(key, value)?,
            "sort_chapters" => self.sort_chapters = parse_bool(key, value)?,
            "report_format" => self.report_format = value.to_string(),
            "theme" => self.theme = value.to_string(),
            "report_path" => {
                self.report_path = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
            "log_level" => self.log_level = value.to_string(),
            "log_format" => self.log_format = value.to_string(),
            _ => {
                return Err(DomainError::BadArgs(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        tracing::debug!("Set config {} = {}", key, value);
        Ok(())
    }

    /// Validate value ranges and enumerated names
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.ffprobe_path.trim().is_empty() {
            return Err(DomainError::BadArgs("ffprobe_path cannot be empty".to_string()));
        }
        if self.probe_timeout_secs == 0 {
            return Err(DomainError::BadArgs(
                "probe_timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.max_chapters == 0 {
            return Err(DomainError::BadArgs("max_chapters must be at least 1".to_string()));
        }
        if self.max_path_len == 0 {
            return Err(DomainError::BadArgs("max_path_len must be at least 1".to_string()));
        }

        self.report_format()?;
        self.theme()?;
        self.log_level()?;
        self.log_format()?;
        Ok(())
    }

    pub fn report_format(&self) -> Result<ReportFormat, DomainError> {
        ReportFormat::parse(&self.report_format)
    }

    pub fn theme(&self) -> Result<Theme, DomainError> {
        Theme::parse(&self.theme)
    }

    pub fn log_level(&self) -> Result<LogLevel, DomainError> {
        LogLevel::parse(&self.log_level)
    }

    pub fn log_format(&self) -> Result<LogFormat, DomainError> {
        LogFormat::parse(&self.log_format)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Report destination, falling back to the well-known name for the format
    pub fn report_path(&self) -> Result<PathBuf, DomainError> {
        match &self.report_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(PathBuf::from(self.report_format()?.default_file_name())),
        }
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, DomainError>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| DomainError::BadArgs(format!("Invalid value for {}: {} ({})", key, value, e)))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, DomainError> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(DomainError::BadArgs(format!(
            "Invalid boolean value for {}: {}",
            key, value
        ))),
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    course_progress: Option<AppConfig>,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Parse a config document; a missing section yields the defaults
    pub fn parse(toml_content: &str) -> Result<AppConfig, DomainError> {
        let parsed: ConfigFile = toml::from_str(toml_content)
            .map_err(|e| DomainError::BadArgs(format!("Failed to parse TOML config: {}", e)))?;
        Ok(parsed.course_progress.unwrap_or_default())
    }

    /// Load and parse a config file
    pub fn load_file(file_path: &Path) -> Result<AppConfig, DomainError> {
        let content = std::fs::read_to_string(file_path).map_err(|e| {
            DomainError::FsFail(format!(
                "Failed to read config file {}: {}",
                file_path.display(),
                e
            ))
        })?;
        Self::parse(&content)
    }

    /// First default location that exists, if any
    pub fn find_default_file() -> Option<PathBuf> {
        DEFAULT_CONFIG_PATHS
            .iter()
            .map(PathBuf::from)
            .find(|path| path.is_file())
    }

    /// Serialize a config back into the file layout
    pub fn serialize(config: &AppConfig) -> Result<String, DomainError> {
        let mut root = toml::map::Map::new();
        let section = toml::Value::try_from(config)
            .map_err(|e| DomainError::InternalError(format!("Failed to serialize config: {}", e)))?;
        root.insert(CONFIG_SECTION.to_string(), section);
        toml::to_string_pretty(&toml::Value::Table(root))
            .map_err(|e| DomainError::InternalError(format!("Failed to serialize config: {}", e)))
    }
}
