use crate::roster::record::TeamRecord;
use serde::Serialize;

/// Parallel latitude, longitude and label sequences projected from records.
///
/// The three sequences always have the same length; index `i` in each one
/// belongs to record `i`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Columns {
    latitudes: Vec<f64>,
    longitudes: Vec<f64>,
    labels: Vec<String>,
}

impl Columns {
    pub fn project(records: &[TeamRecord]) -> Self {
        let mut columns = Self {
            latitudes: Vec::with_capacity(records.len()),
            longitudes: Vec::with_capacity(records.len()),
            labels: Vec::with_capacity(records.len()),
        };
        for record in records {
            columns.latitudes.push(record.latitude);
            columns.longitudes.push(record.longitude);
            columns.labels.push(record.label.clone());
        }
        columns
    }

    pub fn latitudes(&self) -> &[f64] {
        &self.latitudes
    }

    pub fn longitudes(&self) -> &[f64] {
        &self.longitudes
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<(f64, f64, &str)> {
        Some((
            *self.latitudes.get(index)?,
            *self.longitudes.get(index)?,
            self.labels.get(index)?.as_str(),
        ))
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, &str)> + '_ {
        self.latitudes
            .iter()
            .zip(&self.longitudes)
            .zip(&self.labels)
            .map(|((lat, lon), label)| (*lat, *lon, label.as_str()))
    }
}

impl From<&[TeamRecord]> for Columns {
    fn from(records: &[TeamRecord]) -> Self {
        Self::project(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::dataset::frankfurt_teams;

    #[test]
    fn projection_keeps_columns_aligned() {
        let columns = Columns::project(&frankfurt_teams());
        assert_eq!(columns.len(), 9);
        assert_eq!(columns.latitudes().len(), 9);
        assert_eq!(columns.longitudes().len(), 9);
        assert_eq!(columns.labels().len(), 9);
    }

    #[test]
    fn first_entry_is_team_one() {
        let columns = Columns::project(&frankfurt_teams());
        assert_eq!(columns.get(0), Some((50.09523, 8.66144, "Team 1")));
        assert_eq!(columns.get(9), None);
    }

    #[test]
    fn projection_preserves_record_order() {
        let teams = frankfurt_teams();
        let columns = Columns::from(teams.as_slice());
        for (team, (lat, lon, label)) in teams.iter().zip(columns.iter()) {
            assert_eq!(team.latitude, lat);
            assert_eq!(team.longitude, lon);
            assert_eq!(team.label, label);
        }
    }

    #[test]
    fn empty_records_project_to_empty_columns() {
        let columns = Columns::project(&[]);
        assert!(columns.is_empty());
        assert_eq!(columns.iter().count(), 0);
    }
}
