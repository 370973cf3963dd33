//! Outlet domain types.

use super::scan::KegCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of an outlet, unique within a directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutletId(String);

impl OutletId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OutletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OutletId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for OutletId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A bar, restaurant or store holding kegs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outlet {
    pub id: OutletId,
    pub name: String,
    pub address: String,
    /// Kegs currently assigned to the outlet, shown on the assignment picker.
    #[serde(default)]
    pub assigned_kegs: u32,
    /// Kegs ready for pickup. Fixed for the lifetime of a collection session.
    #[serde(default, deserialize_with = "dedup_kegs")]
    eligible_kegs: Vec<KegCode>,
}

impl Outlet {
    pub fn new(
        id: impl Into<OutletId>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            assigned_kegs: 0,
            eligible_kegs: Vec::new(),
        }
    }

    pub fn with_assigned(mut self, count: u32) -> Self {
        self.assigned_kegs = count;
        self
    }

    /// Sets the pickup list. Repeated codes are kept once, first occurrence wins.
    pub fn with_eligible<I, K>(mut self, kegs: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<KegCode>,
    {
        self.eligible_kegs = dedup(kegs.into_iter().map(Into::into));
        self
    }

    pub fn eligible_kegs(&self) -> &[KegCode] {
        &self.eligible_kegs
    }

    pub fn is_eligible(&self, code: &str) -> bool {
        self.eligible_kegs.iter().any(|k| k.as_str() == code)
    }
}

fn dedup(kegs: impl Iterator<Item = KegCode>) -> Vec<KegCode> {
    let mut out: Vec<KegCode> = Vec::new();
    for keg in kegs {
        if !out.contains(&keg) {
            out.push(keg);
        }
    }
    out
}

fn dedup_kegs<'de, D>(deserializer: D) -> Result<Vec<KegCode>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Vec::<KegCode>::deserialize(deserializer)?;
    Ok(dedup(raw.into_iter()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligible_kegs_are_deduplicated_in_order() {
        let outlet = Outlet::new("1", "Corner Store", "123 Main St")
            .with_eligible(["KEG002", "KEG001", "KEG002"]);

        let codes: Vec<_> = outlet.eligible_kegs().iter().map(KegCode::as_str).collect();
        assert_eq!(codes, ["KEG002", "KEG001"]);
    }

    #[test]
    fn eligibility_is_exact_match() {
        let outlet = Outlet::new("2", "Downtown Bar", "456 Oak Ave").with_eligible(["KEG004"]);

        assert!(outlet.is_eligible("KEG004"));
        assert!(!outlet.is_eligible("keg004"));
        assert!(!outlet.is_eligible("KEG004 "));
    }

    #[test]
    fn deserialises_without_optional_fields() {
        let outlet: Outlet = serde_json::from_str(
            r#"{ "id": "4", "name": "City Pub", "address": "321 Elm St" }"#,
        )
        .unwrap();

        assert_eq!(outlet.id.as_str(), "4");
        assert_eq!(outlet.assigned_kegs, 0);
        assert!(outlet.eligible_kegs().is_empty());
    }

    #[test]
    fn deserialised_eligible_kegs_are_deduplicated() {
        let outlet: Outlet = serde_json::from_str(
            r#"{ "id": "2", "name": "Downtown Bar", "address": "456 Oak Ave",
                 "eligible_kegs": ["KEG004", "KEG005", "KEG004"] }"#,
        )
        .unwrap();

        assert_eq!(outlet.eligible_kegs().len(), 2);
    }
}
