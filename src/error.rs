use crate::domain::{OutletId, WorkflowError};
use thiserror::Error;

pub type Result<T = (), E = KegTrackError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone)]
pub enum KegTrackError {
    #[error("Failed to load configuration: {0}")]
    ConfigLoadFailed(String),

    #[error("Failed to read outlet directory {path}: {reason}")]
    DirectoryReadFailed { path: String, reason: String },

    #[error("Failed to parse outlet directory {path}: {reason}")]
    DirectoryParseFailed { path: String, reason: String },

    #[error("Outlet id {0} appears more than once in the directory")]
    DuplicateOutlet(OutletId),

    #[error("Failed to initialise logging: {0}")]
    TelemetryInitFailed(String),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}

impl From<config::ConfigError> for KegTrackError {
    fn from(e: config::ConfigError) -> Self {
        KegTrackError::ConfigLoadFailed(e.to_string())
    }
}
