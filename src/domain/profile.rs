//! Driver profile shown on the profile screen.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverProfile {
    pub name: String,
    pub role: String,
    pub employee_id: String,
    pub phone: String,
    pub email: String,
    pub vehicle: String,
    pub stats: DriverStats,
}

impl Default for DriverProfile {
    fn default() -> Self {
        Self {
            name: "John Driver".into(),
            role: "Delivery Driver".into(),
            employee_id: "DRV001".into(),
            phone: "+1 (555) 987-6543".into(),
            email: "john.driver@kegtrack.com".into(),
            vehicle: "Truck #05 - ABC123".into(),
            stats: DriverStats::default(),
        }
    }
}

impl DriverProfile {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// Lifetime counters, seeded from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverStats {
    pub kegs_delivered: u32,
    pub kegs_collected: u32,
    pub outlets_served: u32,
}

impl Default for DriverStats {
    fn default() -> Self {
        Self {
            kegs_delivered: 127,
            kegs_collected: 89,
            outlets_served: 23,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportContact {
    pub phone: String,
    pub email: String,
}

impl Default for SupportContact {
    fn default() -> Self {
        Self {
            phone: "+1 (555) 123-4567".into(),
            email: "support@kegtrack.com".into(),
        }
    }
}
