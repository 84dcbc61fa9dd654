//! Numeric helpers
//!
//! Money and ratios are computed in `Decimal` and converted to `f64` at the
//! boundary, rounded to 2 decimal places (half away from zero).

use rust_decimal::prelude::*;

/// Decimal places kept for money and ratios
pub const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Division that yields 0 instead of infinity/NaN on a zero denominator
#[inline]
pub fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

/// `f64` convenience wrapper over [`safe_div`]
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    to_f64(safe_div(to_decimal(numerator), to_decimal(denominator)))
}

/// Round to the nearest integer, half away from zero
#[inline]
pub fn round_half_away(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Ceiling of a non-negative decimal as a headcount
#[inline]
pub fn ceil_count(value: Decimal) -> u32 {
    value.max(Decimal::ZERO).ceil().to_u32().unwrap_or(u32::MAX)
}

/// Floor of a non-negative decimal as a count
#[inline]
pub fn floor_count(value: Decimal) -> u32 {
    value.max(Decimal::ZERO).floor().to_u32().unwrap_or(u32::MAX)
}

/// Half-away-from-zero rounding of a non-negative decimal as a count
#[inline]
pub fn round_count(value: Decimal) -> u32 {
    round_half_away(value.max(Decimal::ZERO))
        .to_u32()
        .unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    #[test]
    fn test_safe_div_zero_denominator() {
        assert_eq!(safe_div(d("10"), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(safe_div(d("10"), d("4")), d("2.5"));
        assert_eq!(safe_ratio(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_count(d("2.5")), 3);
        assert_eq!(round_count(d("3.5")), 4);
        assert_eq!(round_count(d("2.49")), 2);
    }

    #[test]
    fn test_counts_clamp_negative_to_zero() {
        assert_eq!(ceil_count(d("-1.2")), 0);
        assert_eq!(floor_count(d("-0.5")), 0);
        assert_eq!(ceil_count(d("8.01")), 9);
        assert_eq!(floor_count(d("8.99")), 8);
    }

    #[test]
    fn test_to_f64_rounds_to_cents() {
        assert_eq!(to_f64(d("1.005")), 1.01);
        assert_eq!(to_f64(to_decimal(1.67)), 1.67);
    }
}
