//! FFprobe adapter for media duration probing
//!
//! Runs `ffprobe` as a child process and parses the single duration value it
//! prints. Each invocation is bounded by a timeout; an expired probe kills the
//! child and reports a failure like any other.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::errors::*;
use crate::ports::*;

/// FFprobe-based probe adapter
pub struct FFprobeAdapter {
    binary: PathBuf,
    timeout: Duration,
}

impl FFprobeAdapter {
    /// Create new FFprobe adapter
    pub fn new(binary: impl Into<PathBuf>, timeout: Duration) -> Result<Self, DomainError> {
        if timeout.is_zero() {
            return Err(DomainError::BadArgs(
                "Probe timeout must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            binary: binary.into(),
            timeout,
        })
    }

    /// Build the ffprobe invocation for one file
    fn command(&self, file_path: &Path) -> Command {
        let mut command = Command::new(&self.binary);
        command
            .args([
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
            ])
            .arg(file_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }

    /// Parse the first line of ffprobe output as seconds
    pub fn parse_duration(stdout: &str) -> Result<f64, DomainError> {
        let line = stdout.lines().next().unwrap_or("").trim();
        let seconds: f64 = line.parse().map_err(|_| {
            DomainError::ProbeFailure(format!("Unparsable ffprobe output: '{}'", line))
        })?;

        if !seconds.is_finite() || seconds < 0.0 {
            return Err(DomainError::ProbeFailure(format!(
                "Invalid duration reported: {}",
                seconds
            )));
        }

        Ok(seconds)
    }
}

#[async_trait]
impl ProbePort for FFprobeAdapter {
    async fn probe_duration(&self, file_path: &Path) -> Result<f64, DomainError> {
        debug!("Probing {}", file_path.display());

        let output = tokio::time::timeout(self.timeout, self.command(file_path).output())
            .await
            .map_err(|_| {
                DomainError::ProbeFailure(format!(
                    "ffprobe timed out after {}s for {}",
                    self.timeout.as_secs(),
                    file_path.display()
                ))
            })?
            .map_err(|e| {
                DomainError::ProbeFailure(format!(
                    "Could not execute {}: {}",
                    self.binary.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            return Err(DomainError::ProbeFailure(format!(
                "ffprobe exited with {} for {}: {}",
                output.status,
                file_path.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Self::parse_duration(&String::from_utf8_lossy(&output.stdout))
    }
}
