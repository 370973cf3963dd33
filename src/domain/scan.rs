//! Keg codes and scan records.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decoded scanner payload. Doubles as the keg identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KegCode(String);

impl KegCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KegCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KegCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for KegCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// One accepted scan within a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRecord {
    pub code: KegCode,
    pub scanned_at: DateTime<Local>,
}

impl ScanRecord {
    pub fn new(code: impl Into<KegCode>, scanned_at: DateTime<Local>) -> Self {
        Self {
            code: code.into(),
            scanned_at,
        }
    }

    /// Capture time as shown to the operator. Informational only.
    pub fn timestamp(&self) -> String {
        crate::utils::format_clock(self.scanned_at)
    }
}

/// What a scan was checked against and failed.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("No outlet selected")]
    NoOutletSelected,

    #[error("Keg does not belong to the selected outlet")]
    NotOwnedByOutlet,

    #[error("Keg has already been scanned")]
    DuplicateScan,
}

/// Result of feeding one decoded payload to a workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Accepted(ScanRecord),
    Rejected { reason: Rejection, code: KegCode },
}

impl ScanOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}
