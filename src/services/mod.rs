pub mod activity;
pub mod dashboard;
pub mod scanner;
pub mod validation;
pub mod workflow;

pub use activity::{Activity, ActivityKind, ActivityLog};
pub use dashboard::DashboardSummary;
pub use scanner::{CodeScanner, ManualScanner};
pub use validation::{finish_collection, validate_scan, FinishRequest, ScanContext};
pub use workflow::Workflow;
