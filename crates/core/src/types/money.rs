//! Money helpers using decimal arithmetic.
//!
//! All prices and totals in VapeMart are `rust_decimal::Decimal` values in
//! USD with 2-decimal display semantics. No floats in money paths.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a monetary amount to cents.
///
/// Midpoints round away from zero (conventional money rounding), so
/// `2.345` becomes `2.35`.
#[must_use]
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a monetary amount as a display price string (e.g., `"$19.99"`).
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_round2_truncates_to_cents() {
        assert_eq!(round2(dec!(1.004)), dec!(1.00));
        assert_eq!(round2(dec!(1.005)), dec!(1.01));
        assert_eq!(round2(dec!(2.799)), dec!(2.80));
    }

    #[test]
    fn test_round2_is_identity_on_cents() {
        assert_eq!(round2(dec!(10.50)), dec!(10.50));
        assert_eq!(round2(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_format_usd_pads_to_two_decimals() {
        assert_eq!(format_usd(dec!(5)), "$5.00");
        assert_eq!(format_usd(dec!(19.9)), "$19.90");
        assert_eq!(format_usd(dec!(0)), "$0.00");
    }
}
