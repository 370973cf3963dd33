//! Scan validation and finish checks as pure functions over a session.

use crate::domain::{Outlet, Rejection, ScanRecord, Session, WorkflowError};
use chrono::{DateTime, Local};

/// Everything a scan is validated against.
#[derive(Debug, Clone, Copy)]
pub struct ScanContext<'a> {
    pub outlet: Option<&'a Outlet>,
    pub session: &'a Session,
    pub check_ownership: bool,
}

impl<'a> ScanContext<'a> {
    pub fn new(session: &'a Session, check_ownership: bool) -> Self {
        Self {
            outlet: session.outlet(),
            session,
            check_ownership,
        }
    }
}

/// Checks one decoded payload. First failing rule wins:
/// selection, then ownership (when enabled), then duplicates.
pub fn validate_scan(
    raw: &str,
    ctx: &ScanContext<'_>,
    now: DateTime<Local>,
) -> Result<ScanRecord, Rejection> {
    let Some(outlet) = ctx.outlet else {
        return Err(Rejection::NoOutletSelected);
    };

    if ctx.check_ownership && !outlet.is_eligible(raw) {
        return Err(Rejection::NotOwnedByOutlet);
    }

    if ctx.session.contains(raw) {
        return Err(Rejection::DuplicateScan);
    }

    Ok(ScanRecord::new(raw, now))
}

/// Confirmation prompt for a non-empty collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishRequest {
    pub count: usize,
    pub outlet_name: String,
}

pub fn finish_collection(session: &Session) -> Result<FinishRequest, WorkflowError> {
    let Some(outlet) = session.outlet() else {
        return Err(WorkflowError::NoOutletSelected);
    };
    if session.is_empty() {
        return Err(WorkflowError::EmptySession);
    }
    Ok(FinishRequest {
        count: session.len(),
        outlet_name: outlet.name.clone(),
    })
}
