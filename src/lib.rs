pub mod config;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;
pub mod telemetry;
pub mod utils;

// Public, stable-ish API surface for consumers (UI / other crates)

pub use crate::config::KegTrackConfig;

pub use crate::domain::{
    KegCode, Notification, Outlet, OutletId, Phase, Progress, Rejection, ReselectPolicy,
    ScanOutcome, ScanRecord, Session, WorkflowError, WorkflowKind,
};

pub use crate::error::{KegTrackError, Result};

pub use crate::repositories::{OutletDirectory, StaticDirectory};

pub use crate::services::{
    finish_collection, validate_scan, CodeScanner, FinishRequest, ManualScanner, ScanContext,
    Workflow,
};

pub mod prelude {
    pub use crate::domain::{
        KegCode, Notification, Outlet, OutletId, Phase, Progress, Rejection, ReselectPolicy,
        ScanOutcome, ScanRecord, WorkflowError, WorkflowKind,
    };
    pub use crate::error::{KegTrackError, Result};
    pub use crate::repositories::{OutletDirectory, StaticDirectory};
    pub use crate::services::{CodeScanner, ManualScanner, Workflow};
}
