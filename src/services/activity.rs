//! Recent activity shown on the dashboard.

use crate::domain::{Notification, WorkflowKind};
use chrono::{DateTime, Local, NaiveDate};
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    KegAssigned,
    CollectionCompleted,
}

impl ActivityKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::KegAssigned => "Keg Assigned",
            Self::CollectionCompleted => "Kegs Collected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub kind: ActivityKind,
    pub subject: String,
    /// Kegs involved: one per assignment, the batch size per collection.
    pub kegs: usize,
    pub at: DateTime<Local>,
}

/// Bounded, newest-first activity history.
///
/// Keg counts are tallied separately and survive entries falling off the end.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<Activity>,
    capacity: usize,
    totals: HashMap<ActivityKind, usize>,
    daily: HashMap<(ActivityKind, NaiveDate), usize>,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::with_capacity(10)
    }
}

impl ActivityLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            totals: HashMap::new(),
            daily: HashMap::new(),
        }
    }

    /// Records assignment and collection successes. Other notifications are ignored.
    pub fn record(
        &mut self,
        source: WorkflowKind,
        notification: &Notification,
        at: DateTime<Local>,
    ) {
        let activity = match notification {
            Notification::ScanAccepted { code, outlet_name }
                if source == WorkflowKind::Assignment =>
            {
                Activity {
                    kind: ActivityKind::KegAssigned,
                    subject: format!("Keg {} delivered to {}", code, outlet_name),
                    kegs: 1,
                    at,
                }
            }
            Notification::CollectionConfirmed { count, outlet_name } => Activity {
                kind: ActivityKind::CollectionCompleted,
                subject: format!("Picked up {} from {}", plural_kegs(*count), outlet_name),
                kegs: *count,
                at,
            },
            _ => return,
        };

        *self.totals.entry(activity.kind).or_default() += activity.kegs;
        *self
            .daily
            .entry((activity.kind, activity.at.date_naive()))
            .or_default() += activity.kegs;

        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(activity);
    }

    pub fn entries(&self) -> impl Iterator<Item = &Activity> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Kegs of the given kind recorded on the same calendar day as `now`.
    pub fn kegs_on_day(&self, kind: ActivityKind, now: DateTime<Local>) -> usize {
        self.daily
            .get(&(kind, now.date_naive()))
            .copied()
            .unwrap_or(0)
    }

    /// Kegs of the given kind recorded since the log was created.
    pub fn kegs_total(&self, kind: ActivityKind) -> usize {
        self.totals.get(&kind).copied().unwrap_or(0)
    }
}

fn plural_kegs(count: usize) -> String {
    if count == 1 {
        "1 keg".to_string()
    } else {
        format!("{} kegs", count)
    }
}
