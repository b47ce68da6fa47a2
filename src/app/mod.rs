// Application layer - Use case interactors

pub mod container;
pub mod progress_interactor;
pub mod report_interactor;

// Re-export interactors
pub use progress_interactor::{ProgressInteractor, ScanOptions};
pub use report_interactor::{ReportInteractor, ReportOutcome};
