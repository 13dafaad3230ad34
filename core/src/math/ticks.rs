use crate::math::bounds::Range;

const STEP_FACTORS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Smallest "round" step that fits `span` into at most `max_ticks` intervals.
pub fn nice_step(span: f64, max_ticks: usize) -> f64 {
    if !(span > 0.0) || !span.is_finite() {
        return 1.0;
    }
    let raw = span / max_ticks.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    STEP_FACTORS
        .iter()
        .map(|factor| factor * magnitude)
        .find(|step| *step >= raw * (1.0 - 1e-9))
        .unwrap_or(10.0 * magnitude)
}

/// Tick positions at multiples of [`nice_step`] that fall inside `range`.
pub fn nice_ticks(range: Range, max_ticks: usize) -> Vec<f64> {
    let span = range.span();
    if !(span > 0.0) || !span.is_finite() {
        return Vec::new();
    }
    let step = nice_step(span, max_ticks);
    let first = (range.min / step - 1e-9).ceil() as i64;
    let last = (range.max / step + 1e-9).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Fixed-point label with as many decimals as `step` needs.
pub fn tick_label(value: f64, step: f64) -> String {
    let mut decimals = 0;
    while decimals < 12 {
        let scaled = step * 10f64.powi(decimals as i32);
        if (scaled - scaled.round()).abs() < 1e-6 * scaled.abs().max(1.0) {
            break;
        }
        decimals += 1;
    }
    let value = if value.abs() < step.abs() * 1e-9 {
        0.0
    } else {
        value
    };
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_range_gets_fifths() {
        let ticks = nice_ticks(Range::new(0.0, 1.0), 5);
        assert_eq!(ticks.len(), 6);
        assert!((ticks[1] - 0.2).abs() < 1e-12);
        assert!((ticks[5] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn step_picks_round_factor() {
        assert!((nice_step(0.023584, 6) - 0.005).abs() < 1e-12);
        assert!((nice_step(10.0, 4) - 2.5).abs() < 1e-12);
        assert_eq!(nice_step(0.0, 4), 1.0);
    }

    #[test]
    fn ticks_stay_inside_range() {
        let range = Range::new(50.094158, 50.117742);
        let ticks = nice_ticks(range, 6);
        assert_eq!(ticks.len(), 5);
        assert!(ticks.iter().all(|tick| range.contains(*tick)));
    }

    #[test]
    fn degenerate_range_has_no_ticks() {
        assert!(nice_ticks(Range::new(3.0, 3.0), 5).is_empty());
    }

    #[test]
    fn labels_use_step_precision() {
        assert_eq!(tick_label(50.105, 0.005), "50.105");
        assert_eq!(tick_label(7.5, 2.5), "7.5");
        assert_eq!(tick_label(40.0, 20.0), "40");
        assert_eq!(tick_label(-1e-17, 0.2), "0.0");
    }
}
