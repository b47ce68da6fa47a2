use std::sync::Arc;

use crate::adapters::{AppConfig, FFprobeAdapter, StdFsAdapter, TracingLogAdapter};
use crate::app::{
    progress_interactor::{ProgressInteractor, ScanOptions},
    report_interactor::ReportInteractor,
};
use crate::domain::errors::DomainError;
use crate::ports::{FsPort, LogPort, ProbePort};

pub trait AppContainer: Send + Sync {
    fn progress_interactor(&self) -> Arc<ProgressInteractor>;
    fn report_interactor(&self) -> Arc<ReportInteractor>;
}

pub struct DefaultAppContainer {
    progress_interactor: Arc<ProgressInteractor>,
    report_interactor: Arc<ReportInteractor>,
}

impl DefaultAppContainer {
    /// Wire the production adapters from the effective configuration
    pub fn new(config: &AppConfig) -> Result<Self, DomainError> {
        let probe_port = Arc::new(FFprobeAdapter::new(
            config.ffprobe_path.clone(),
            config.probe_timeout(),
        )?);
        let fs_port = Arc::new(StdFsAdapter::new(config.follow_symlinks)?);
        let log_port = Arc::new(TracingLogAdapter::new()?);

        Ok(Self::with_ports(
            probe_port,
            fs_port,
            log_port,
            Self::scan_options(config),
        ))
    }

    /// Wire arbitrary port implementations
    pub fn with_ports(
        probe_port: Arc<dyn ProbePort>,
        fs_port: Arc<dyn FsPort>,
        log_port: Arc<dyn LogPort>,
        options: ScanOptions,
    ) -> Self {
        let progress_interactor = Arc::new(ProgressInteractor::new(
            Arc::clone(&probe_port),
            Arc::clone(&fs_port),
            Arc::clone(&log_port),
            options,
        ));

        let report_interactor = Arc::new(ReportInteractor::new(
            Arc::clone(&fs_port),
            Arc::clone(&log_port),
        ));

        Self {
            progress_interactor,
            report_interactor,
        }
    }

    pub fn scan_options(config: &AppConfig) -> ScanOptions {
        ScanOptions {
            max_chapters: config.max_chapters,
            max_path_len: config.max_path_len,
            sort_entries: config.sort_chapters,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn progress_interactor(&self) -> Arc<ProgressInteractor> {
        Arc::clone(&self.progress_interactor)
    }

    fn report_interactor(&self) -> Arc<ReportInteractor> {
        Arc::clone(&self.report_interactor)
    }
}
