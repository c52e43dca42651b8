//! Rounding helpers shared by the analyzers and the scorer.

/// Rounds `value` to `decimals` places, half away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Share of `count` in `total` as a percentage rounded to 2 places.
///
/// Returns 0 for an empty total so empty files never divide by zero.
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(count as f64 / total as f64 * 100.0, 2)
}

/// Shortest round-trip text for `value`, keeping one decimal on whole numbers.
///
/// `12.0` prints as `12.0` and `16.67` as `16.67`.
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_places() {
        assert_eq!(round_to(33.333_333, 2), 33.33);
        assert_eq!(round_to(6.667, 1), 6.7);
        assert_eq!(round_to(-2.345_67, 2), -2.35);
        assert_eq!(round_to(4.0, 2), 4.0);
    }

    #[test]
    fn formats_decimals() {
        assert_eq!(format_decimal(12.0), "12.0");
        assert_eq!(format_decimal(16.67), "16.67");
        assert_eq!(format_decimal(-1.5), "-1.5");
        assert_eq!(format_decimal(0.0), "0.0");
    }

    #[test]
    fn percentage_handles_empty_total() {
        assert_eq!(percentage(3, 0), 0.0);
        assert_eq!(percentage(1, 3), 33.33);
        assert_eq!(percentage(1, 6), 16.67);
    }
}
