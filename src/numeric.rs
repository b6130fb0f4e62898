// Digits printed past the requested precision when probing for an exact tie.
// An f64 in the ranges we handle has a finite binary expansion well within this.
const TIE_PROBE_DIGITS: usize = 40;

/// Nearest integer, exact halves go toward +inf (`-2.5 -> -2`, `2.5 -> 3`).
pub fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Rounds to `decimals` places using the exact decimal value of the float.
/// Exact ties round away from zero, so `7.25 -> 7.3` but `1.005 -> 1.0`
/// (1.005 is stored slightly below the tie).
pub fn round_to_decimals(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let magnitude = value.abs();
    let rounded = round_tie_up(magnitude, decimals)
        .unwrap_or_else(|| format!("{magnitude:.decimals$}").parse().unwrap_or(magnitude));
    if value.is_sign_negative() {
        -rounded
    } else {
        rounded
    }
}

fn round_tie_up(magnitude: f64, decimals: usize) -> Option<f64> {
    let long = format!("{:.*}", decimals + TIE_PROBE_DIGITS, magnitude);
    let (head, tail) = long.split_at(long.len() - TIE_PROBE_DIGITS);
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return None;
    }

    let digits: String = head.chars().filter(|c| c.is_ascii_digit()).collect();
    let bumped = digits.parse::<u128>().ok()?.checked_add(1)?;
    let mut text = format!("{bumped:0width$}", width = decimals + 1);
    if decimals > 0 {
        text.insert(text.len() - decimals, '.');
    }
    text.parse().ok()
}

/// Arithmetic mean rounded to one decimal; empty input is 0.
pub fn mean_one_decimal(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum = values.iter().fold(0.0, |acc, v| acc + non_negative(*v));
    round_to_decimals(sum / values.len() as f64, 1)
}

/// Non-finite values and negatives collapse to 0.
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

pub fn percentage(value: f64) -> f64 {
    non_negative(value).min(100.0)
}

pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    v.max(lo).min(hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_up_moves_halves_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(9.49), 9.0);
        assert_eq!(round_half_up(10.0), 10.0);
        assert_eq!(round_half_up(f64::NAN), 0.0);
    }

    #[test]
    fn round_to_decimals_breaks_exact_ties_upward() {
        assert_eq!(round_to_decimals(7.25, 1), 7.3);
        assert_eq!(round_to_decimals(0.125, 2), 0.13);
        assert_eq!(round_to_decimals(2.5, 0), 3.0);
        assert_eq!(round_to_decimals(-7.25, 1), -7.3);
    }

    #[test]
    fn round_to_decimals_respects_binary_representation() {
        // Both literals sit just below their apparent tie.
        assert_eq!(round_to_decimals(1.005, 2), 1.0);
        assert_eq!(round_to_decimals(2.675, 2), 2.67);
        assert_eq!(round_to_decimals(7.4 + 4.4, 1), 11.8);
        assert_eq!(round_to_decimals(3.0, 2), 3.0);
    }

    #[test]
    fn mean_of_empty_series_is_zero() {
        assert_eq!(mean_one_decimal(&[]), 0.0);
        assert_eq!(mean_one_decimal(&[7.0, 8.0, 6.0, 9.0, 7.0]), 7.4);
        assert_eq!(mean_one_decimal(&[7.0, 8.0, 7.0, 7.0]), 7.3);
    }

    #[test]
    fn malformed_values_are_clamped_not_propagated() {
        assert_eq!(mean_one_decimal(&[f64::NAN, -4.0, 6.0]), 2.0);
        assert_eq!(percentage(140.0), 100.0);
        assert_eq!(percentage(-3.0), 0.0);
    }
}
