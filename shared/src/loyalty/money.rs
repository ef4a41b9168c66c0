//! Decimal helpers for monetary arithmetic
//!
//! Calculations run on `Decimal` and convert back to `f64` (2dp) for the
//! wire format.

use rust_decimal::prelude::*;

/// Rounding for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
///
/// `None` for NaN/Infinity and for magnitudes outside `Decimal`'s range.
/// Values below its precision come back as zero; callers that divide check
/// the converted value, not the f64.
#[inline]
pub fn to_decimal(value: f64) -> Option<Decimal> {
    let converted = Decimal::from_f64(value);
    if converted.is_none() {
        tracing::warn!(value = ?value, "f64 outside decimal range in monetary calculation");
    }
    converted
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Parse a form field the way the wizard does: trimmed, finite, else `None`
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Indian digit grouping for rupee display (`₹1,00,000`)
pub fn format_inr(amount: f64) -> String {
    let rounded = to_decimal(amount)
        .and_then(|d| d.round().to_i64())
        .unwrap_or_else(|| amount.round() as i64);
    let negative = rounded < 0;
    let digits = rounded.unsigned_abs().to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut parts: Vec<&str> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (left, right) = rest.split_at(rest.len() - 2);
            parts.push(right);
            rest = left;
        }
        parts.push(rest);
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };

    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_f64_rounds_half_away() {
        assert_eq!(to_f64(Decimal::new(1005, 3)), 1.01);
        assert_eq!(to_f64(Decimal::new(-1005, 3)), -1.01);
    }

    #[test]
    fn test_to_decimal_rejects_unrepresentable() {
        assert_eq!(to_decimal(f64::NAN), None);
        assert_eq!(to_decimal(f64::INFINITY), None);
        assert_eq!(to_decimal(1e30), None);
        assert_eq!(to_decimal(-1e30), None);
        assert_eq!(to_decimal(12.5), Some(Decimal::new(125, 1)));
    }

    #[test]
    fn test_to_decimal_tiny_values_never_nonzero() {
        assert!(to_decimal(1e-30).is_none_or(|d| d.is_zero()));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 1000 "), Some(1000.0));
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(450.0), "₹450");
        assert_eq!(format_inr(1240.0), "₹1,240");
        assert_eq!(format_inr(25_000.0), "₹25,000");
        assert_eq!(format_inr(100_000.0), "₹1,00,000");
        assert_eq!(format_inr(12_345_678.0), "₹1,23,45,678");
        assert_eq!(format_inr(-1240.0), "-₹1,240");
    }

    #[test]
    fn test_format_inr_outside_decimal_range_does_not_panic() {
        assert!(format_inr(1e30).starts_with('₹'));
        assert_eq!(format_inr(f64::NAN), "₹0");
    }
}
