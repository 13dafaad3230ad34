pub mod columns;
pub mod dataset;
pub mod record;

pub use columns::Columns;
pub use dataset::{active_records, frankfurt_roster, frankfurt_teams};
pub use record::{RosterEntry, TeamRecord};
