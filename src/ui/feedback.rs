//! Operator-facing wording for workflow notifications.

use kegtrack::{Notification, Rejection, WorkflowError, WorkflowKind};

/// Title and body for a notification raised by the given workflow.
pub fn describe(
    kind: WorkflowKind,
    note: &Notification,
    outlet: Option<&str>,
) -> (String, String) {
    let outlet = outlet.unwrap_or("the selected outlet");
    match (note, kind) {
        (Notification::ScanAccepted { code, outlet_name }, WorkflowKind::Assignment) => (
            "Keg Scanned".into(),
            format!("Keg {} assigned to {}", code, outlet_name),
        ),
        (Notification::ScanAccepted { code, outlet_name }, WorkflowKind::Collection) => (
            "Keg Collected".into(),
            format!("Keg {} collected from {}", code, outlet_name),
        ),
        (Notification::ScanRejected { reason, code }, _) => {
            describe_rejection(kind, *reason, code.as_str(), outlet)
        }
        (Notification::CollectionConfirmed { count, outlet_name }, _) => (
            "Success".into(),
            format!(
                "Collection of {} from {} completed successfully!",
                kegs(*count),
                outlet_name
            ),
        ),
        (Notification::CollectionEmpty, _) => (
            "No Kegs".into(),
            "No kegs have been collected yet".into(),
        ),
    }
}

fn describe_rejection(
    kind: WorkflowKind,
    reason: Rejection,
    code: &str,
    outlet: &str,
) -> (String, String) {
    match (reason, kind) {
        (Rejection::NoOutletSelected, _) => {
            ("Error".into(), "Please select an outlet first".into())
        }
        (Rejection::NotOwnedByOutlet, _) => (
            "Invalid Keg".into(),
            format!("Keg {} does not belong to {}", code, outlet),
        ),
        (Rejection::DuplicateScan, WorkflowKind::Assignment) => (
            "Duplicate Scan".into(),
            format!("Keg {} has already been scanned", code),
        ),
        (Rejection::DuplicateScan, WorkflowKind::Collection) => (
            "Already Collected".into(),
            format!("Keg {} has already been collected", code),
        ),
    }
}

pub fn describe_error(error: &WorkflowError) -> (String, String) {
    match error {
        WorkflowError::NoOutletSelected => {
            ("Error".into(), "Please select an outlet first".into())
        }
        other => ("Error".into(), other.to_string()),
    }
}

pub fn kegs(count: usize) -> String {
    if count == 1 {
        "1 keg".to_string()
    } else {
        format!("{} kegs", count)
    }
}
