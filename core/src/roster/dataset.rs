use crate::roster::record::{RosterEntry, TeamRecord};

/// The full team listing for Frankfurt am Main in source order.
///
/// Teams 10 to 18 are kept but switched off; only teams 1 to 9 are plotted.
pub fn frankfurt_roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry::active(50.09523, 8.66144, "Team 1"),
        RosterEntry::active(50.11092, 8.68212, "Team 2"),
        RosterEntry::active(50.11552, 8.68417, "Team 3"),
        RosterEntry::active(50.11222, 8.65119, "Team 4"),
        RosterEntry::active(50.11667, 8.66972, "Team 5"),
        RosterEntry::active(50.11417, 8.67861, "Team 6"),
        RosterEntry::active(50.10722, 8.66972, "Team 7"),
        RosterEntry::active(50.11333, 8.66972, "Team 8"),
        RosterEntry::active(50.11111, 8.68333, "Team 9"),
        RosterEntry::inactive(50.11389, 8.68278, "Team 10"),
        RosterEntry::inactive(50.11028, 8.68278, "Team 11"),
        RosterEntry::inactive(50.11611, 8.68222, "Team 12"),
        RosterEntry::inactive(50.12028, 8.68333, "Team 13"),
        RosterEntry::inactive(50.11833, 8.68222, "Team 14"),
        RosterEntry::inactive(50.11056, 8.68444, "Team 15"),
        RosterEntry::inactive(50.11083, 8.70111, "Team 16"),
        RosterEntry::inactive(50.10639, 8.66944, "Team 17"),
        RosterEntry::inactive(50.11583, 8.68222, "Team 18"),
    ]
}

/// Keeps the active entries, preserving their order.
pub fn active_records(entries: &[RosterEntry]) -> Vec<TeamRecord> {
    entries
        .iter()
        .filter(|entry| entry.active)
        .map(|entry| entry.record.clone())
        .collect()
}

pub fn frankfurt_teams() -> Vec<TeamRecord> {
    active_records(&frankfurt_roster())
}
