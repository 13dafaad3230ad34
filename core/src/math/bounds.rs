use crate::math::stats::StatsHelper;
use serde::{Deserialize, Serialize};

/// Fraction of the data span added on each side when autoscaling.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

/// Closed interval on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Default for Range {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Axis limits for `values`: the data extent padded by
    /// [`AUTOSCALE_MARGIN`] on both ends. No data yields `0..1`.
    pub fn autoscale(values: &[f64]) -> Self {
        let Some((min, max)) = StatsHelper::extent(values) else {
            return Self::default();
        };
        let span = max - min;
        if span == 0.0 {
            let widen = if min == 0.0 {
                0.5
            } else {
                min.abs() * AUTOSCALE_MARGIN
            };
            return Self::new(min - widen, max + widen);
        }
        let margin = span * AUTOSCALE_MARGIN;
        Self::new(min - margin, max + margin)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_data_uses_unit_range() {
        assert_eq!(Range::autoscale(&[]), Range::new(0.0, 1.0));
    }

    #[test]
    fn autoscale_pads_both_sides() {
        let range = Range::autoscale(&[10.0, 20.0]);
        assert!((range.min - 9.5).abs() < 1e-12);
        assert!((range.max - 20.5).abs() < 1e-12);
    }

    #[test]
    fn single_value_is_widened() {
        let range = Range::autoscale(&[4.0]);
        assert!(range.span() > 0.0);
        assert!(range.contains(4.0));

        let zero = Range::autoscale(&[0.0, 0.0]);
        assert_eq!(zero, Range::new(-0.5, 0.5));
    }
}
