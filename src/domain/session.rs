//! Per-workflow session state.
//!
//! A [`Session`] is a value object: transitions consume it and hand back the
//! next state, so the workflow never patches fields in place.

use super::outlet::Outlet;
use super::scan::ScanRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowKind {
    /// Any code may be assigned to any outlet.
    Assignment,
    /// Codes must come from the outlet's pickup list.
    Collection,
}

impl WorkflowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assignment => "assignment",
            Self::Collection => "collection",
        }
    }

    pub fn checks_ownership(&self) -> bool {
        matches!(self, Self::Collection)
    }
}

/// What happens to the scanned list when another outlet is picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReselectPolicy {
    #[default]
    KeepSession,
    ResetSession,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    NoOutletSelected,
    OutletSelected,
    Scanning,
    Confirming,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoOutletSelected => "no outlet selected",
            Self::OutletSelected => "outlet selected",
            Self::Scanning => "scanning",
            Self::Confirming => "confirming",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    outlet: Option<Outlet>,
    records: Vec<ScanRecord>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outlet(&self) -> Option<&Outlet> {
        self.outlet.as_ref()
    }

    pub fn records(&self) -> &[ScanRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.records.iter().any(|r| r.code.as_str() == code)
    }

    /// Replaces the selection. Records survive only under [`ReselectPolicy::KeepSession`].
    pub fn with_outlet(self, outlet: Outlet, policy: ReselectPolicy) -> Self {
        let records = match policy {
            ReselectPolicy::KeepSession => self.records,
            ReselectPolicy::ResetSession => Vec::new(),
        };
        Self {
            outlet: Some(outlet),
            records,
        }
    }

    /// Appends an accepted record. Insertion order is the only ordering.
    pub fn with_record(mut self, record: ScanRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Drops both the selection and the records.
    pub fn cleared(self) -> Self {
        Self::default()
    }

    /// Collection progress against the selected outlet's pickup list.
    pub fn progress(&self) -> Option<Progress> {
        self.outlet.as_ref().map(|outlet| Progress {
            collected: self.records.len(),
            eligible: outlet.eligible_kegs().len(),
        })
    }
}

/// Derived collection progress. Holds no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub collected: usize,
    pub eligible: usize,
}

impl Progress {
    /// Fraction collected, in `[0, 1]`. An empty pickup list reads as zero.
    pub fn ratio(&self) -> f64 {
        if self.eligible == 0 {
            return 0.0;
        }
        (self.collected as f64 / self.eligible as f64).min(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.eligible > 0 && self.collected >= self.eligible
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collected, self.eligible)
    }
}
