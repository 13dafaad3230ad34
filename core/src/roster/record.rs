use serde::{Deserialize, Serialize};

/// One plotted point: a position and the team name drawn next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

impl TeamRecord {
    pub fn new(latitude: f64, longitude: f64, label: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            label: label.into(),
        }
    }
}

/// A record as it appears in the literal listing, with its exclusion flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub record: TeamRecord,
    pub active: bool,
}

impl RosterEntry {
    pub fn active(latitude: f64, longitude: f64, label: &str) -> Self {
        Self {
            record: TeamRecord::new(latitude, longitude, label),
            active: true,
        }
    }

    pub fn inactive(latitude: f64, longitude: f64, label: &str) -> Self {
        Self {
            record: TeamRecord::new(latitude, longitude, label),
            active: false,
        }
    }
}
