//! Workflow error types.

use super::outlet::OutletId;
use super::session::Phase;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Select an outlet first")]
    NoOutletSelected,

    #[error("Outlet {0} not found")]
    OutletNotFound(OutletId),

    #[error("No kegs have been collected yet")]
    EmptySession,

    #[error("Cannot {action} while {phase}")]
    InvalidPhase { action: &'static str, phase: Phase },

    #[error("Scanner error: {0}")]
    Scanner(String),
}

pub type Result<T> = std::result::Result<T, WorkflowError>;
