//! Derived cart totals.
//!
//! Totals are pure functions of the line items, recomputed on every
//! read and never cached, so displayed figures cannot go stale.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use vapemart_core::round2;

use super::CartLineItem;

/// Flat shipping rate applied to any non-empty cart.
pub const FLAT_SHIPPING_RATE: Decimal = dec!(10);

/// Sales tax rate applied to the subtotal.
pub const TAX_RATE: Decimal = dec!(0.07);

/// The order summary figures shown on the cart page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl CartTotals {
    /// Compute totals for the given line items.
    ///
    /// `subtotal` is the sum of price times quantity, `shipping` is the
    /// flat rate whenever the subtotal is positive, `tax` is 7% of the
    /// subtotal rounded to cents, and `total` is their sum.
    #[must_use]
    pub fn compute(items: &[CartLineItem]) -> Self {
        let subtotal: Decimal = items.iter().map(CartLineItem::line_total).sum();
        let shipping = if subtotal > Decimal::ZERO {
            FLAT_SHIPPING_RATE
        } else {
            Decimal::ZERO
        };
        let tax = round2(subtotal * TAX_RATE);
        let total = subtotal + shipping + tax;

        Self {
            subtotal,
            shipping,
            tax,
            total,
        }
    }

    /// Totals for an empty cart (all zero).
    #[must_use]
    pub fn empty() -> Self {
        Self::compute(&[])
    }
}

#[cfg(test)]
mod tests {
    use vapemart_core::ProductId;

    use super::*;

    fn line(price: Decimal, quantity: u32) -> CartLineItem {
        CartLineItem {
            id: ProductId::from("p"),
            name: "Product".to_owned(),
            price,
            image: String::new(),
            category: "Vape".to_owned(),
            quantity,
        }
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let totals = CartTotals::empty();
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.shipping, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn test_totals_sum_lines_and_add_flat_shipping() {
        let items = vec![line(dec!(10.00), 2), line(dec!(5.50), 1)];
        let totals = CartTotals::compute(&items);

        assert_eq!(totals.subtotal, dec!(25.50));
        assert_eq!(totals.shipping, dec!(10));
        assert_eq!(totals.tax, dec!(1.79)); // 25.50 * 0.07 = 1.785, rounds up
        assert_eq!(totals.total, dec!(37.29));
    }

    #[test]
    fn test_total_is_subtotal_plus_shipping_plus_tax() {
        let items = vec![line(dec!(33.33), 3)];
        let totals = CartTotals::compute(&items);
        assert_eq!(
            totals.total,
            totals.subtotal + totals.shipping + totals.tax
        );
    }
}
