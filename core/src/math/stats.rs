pub struct StatsHelper;

impl StatsHelper {
    /// Smallest and largest finite value, or `None` when there is none.
    pub fn extent(values: &[f64]) -> Option<(f64, f64)> {
        values
            .iter()
            .copied()
            .filter(|value| value.is_finite())
            .fold(None, |acc, value| match acc {
                None => Some((value, value)),
                Some((min, max)) => Some((min.min(value), max.max(value))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_of_empty_sequence_is_none() {
        assert_eq!(StatsHelper::extent(&[]), None);
        assert_eq!(StatsHelper::extent(&[f64::NAN]), None);
    }

    #[test]
    fn extent_skips_non_finite_values() {
        assert_eq!(
            StatsHelper::extent(&[3.0, f64::INFINITY, -1.0, 2.0]),
            Some((-1.0, 3.0))
        );
    }
}
