//! Structured operator notifications.
//!
//! The core only says *what* happened; the presentation layer decides how
//! each notification is rendered.

use super::error::WorkflowError;
use super::scan::{KegCode, Rejection, ScanOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    ScanAccepted { code: KegCode, outlet_name: String },
    ScanRejected { reason: Rejection, code: KegCode },
    CollectionConfirmed { count: usize, outlet_name: String },
    CollectionEmpty,
}

impl Notification {
    pub fn from_outcome(outcome: &ScanOutcome, outlet_name: &str) -> Self {
        match outcome {
            ScanOutcome::Accepted(record) => Self::ScanAccepted {
                code: record.code.clone(),
                outlet_name: outlet_name.to_string(),
            },
            ScanOutcome::Rejected { reason, code } => Self::ScanRejected {
                reason: *reason,
                code: code.clone(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Self::ScanAccepted { .. } | Self::CollectionConfirmed { .. }
        )
    }
}

impl WorkflowError {
    /// The operator notification this error corresponds to, if any.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Self::EmptySession => Some(Notification::CollectionEmpty),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScanRecord;
    use chrono::Local;

    #[test]
    fn accepted_outcome_names_the_outlet() {
        let outcome = ScanOutcome::Accepted(ScanRecord::new("KEG001", Local::now()));

        assert_eq!(
            Notification::from_outcome(&outcome, "Corner Store"),
            Notification::ScanAccepted {
                code: "KEG001".into(),
                outlet_name: "Corner Store".into(),
            }
        );
    }

    #[test]
    fn rejected_outcome_keeps_reason() {
        let outcome = ScanOutcome::Rejected {
            reason: Rejection::NotOwnedByOutlet,
            code: "KEG099".into(),
        };
        let note = Notification::from_outcome(&outcome, "Downtown Bar");

        assert!(!note.is_success());
        assert!(matches!(
            note,
            Notification::ScanRejected {
                reason: Rejection::NotOwnedByOutlet,
                ..
            }
        ));
    }

    #[test]
    fn only_empty_session_maps_to_a_notification() {
        assert_eq!(
            WorkflowError::EmptySession.notification(),
            Some(Notification::CollectionEmpty)
        );
        assert_eq!(WorkflowError::NoOutletSelected.notification(), None);
    }
}
