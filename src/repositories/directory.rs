//! Outlet directory: read-only lookup of outlet records.

use crate::domain::{Outlet, OutletId, WorkflowError};
use crate::error::{KegTrackError, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Source of outlet records, supplied in full at startup.
pub trait OutletDirectory {
    /// All outlets, in stable display order.
    fn outlets(&self) -> &[Outlet];

    fn find(&self, id: &OutletId) -> std::result::Result<&Outlet, WorkflowError> {
        self.outlets()
            .iter()
            .find(|o| &o.id == id)
            .ok_or_else(|| WorkflowError::OutletNotFound(id.clone()))
    }
}

impl<D: OutletDirectory + ?Sized> OutletDirectory for &D {
    fn outlets(&self) -> &[Outlet] {
        (**self).outlets()
    }
}

/// In-memory directory.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    outlets: Vec<Outlet>,
}

impl StaticDirectory {
    /// Builds a directory, refusing repeated outlet ids.
    pub fn new(outlets: Vec<Outlet>) -> Result<Self> {
        let mut seen = HashSet::new();
        for outlet in &outlets {
            if !seen.insert(&outlet.id) {
                return Err(KegTrackError::DuplicateOutlet(outlet.id.clone()));
            }
        }
        Ok(Self { outlets })
    }

    /// Loads a JSON array of outlet records.
    #[instrument]
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let shown = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|e| KegTrackError::DirectoryReadFailed {
            path: shown.clone(),
            reason: e.to_string(),
        })?;
        let outlets: Vec<Outlet> =
            serde_json::from_str(&raw).map_err(|e| KegTrackError::DirectoryParseFailed {
                path: shown.clone(),
                reason: e.to_string(),
            })?;

        info!(path = %shown, count = outlets.len(), "Loaded outlet directory");
        Self::new(outlets)
    }

    /// Loads from `path` when given, otherwise falls back to `demo`.
    pub fn load_or(path: Option<&Path>, demo: fn() -> Self) -> Result<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => {
                debug!("No directory file configured, using built-in outlets");
                Ok(demo())
            }
        }
    }

    /// Outlets offered on the assignment screen.
    pub fn assignment_demo() -> Self {
        Self {
            outlets: vec![
                Outlet::new("1", "Corner Store", "123 Main St").with_assigned(5),
                Outlet::new("2", "Downtown Bar", "456 Oak Ave").with_assigned(3),
                Outlet::new("3", "Sunset Restaurant", "789 Pine Rd").with_assigned(8),
                Outlet::new("4", "City Pub", "321 Elm St").with_assigned(2),
            ],
        }
    }

    /// Outlets with kegs ready for pickup.
    pub fn collection_demo() -> Self {
        Self {
            outlets: vec![
                Outlet::new("1", "Corner Store", "123 Main St")
                    .with_eligible(["KEG001", "KEG002", "KEG003"]),
                Outlet::new("2", "Downtown Bar", "456 Oak Ave").with_eligible(["KEG004", "KEG005"]),
                Outlet::new("3", "Sunset Restaurant", "789 Pine Rd")
                    .with_eligible(["KEG006", "KEG007", "KEG008", "KEG009"]),
            ],
        }
    }
}

impl OutletDirectory for StaticDirectory {
    fn outlets(&self) -> &[Outlet] {
        &self.outlets
    }
}
