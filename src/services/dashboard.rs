//! Figures for the dashboard cards.

use super::activity::{ActivityKind, ActivityLog};
use crate::repositories::OutletDirectory;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardSummary {
    pub total_kegs: usize,
    pub active_outlets: usize,
    pub delivered_today: usize,
    pub pending_pickup: usize,
}

impl DashboardSummary {
    pub fn compute(
        assignment: &impl OutletDirectory,
        collection: &impl OutletDirectory,
        log: &ActivityLog,
        now: DateTime<Local>,
    ) -> Self {
        let assigned: usize = assignment
            .outlets()
            .iter()
            .map(|o| o.assigned_kegs as usize)
            .sum();
        let eligible: usize = collection
            .outlets()
            .iter()
            .map(|o| o.eligible_kegs().len())
            .sum();

        Self {
            total_kegs: assigned + log.kegs_total(ActivityKind::KegAssigned),
            active_outlets: assignment.outlets().len(),
            delivered_today: log.kegs_on_day(ActivityKind::KegAssigned, now),
            pending_pickup: eligible
                .saturating_sub(log.kegs_total(ActivityKind::CollectionCompleted)),
        }
    }
}
