//! Cart aggregate calculations.

use crate::cart::line_item::LineItem;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Orders at or above this subtotal ship free.
pub const FREE_SHIPPING_THRESHOLD: Money = Money::from_cents(5000);

/// Flat rate applied below the free-shipping threshold.
pub const STANDARD_SHIPPING_RATE: Money = Money::from_cents(599);

/// Shipping cost for a given subtotal.
///
/// An empty cart ships for nothing, a subtotal at or above the threshold
/// ships free, and everything in between pays the flat standard rate.
pub fn shipping_for(subtotal: Money) -> Money {
    if subtotal.is_zero() || subtotal >= FREE_SHIPPING_THRESHOLD {
        Money::zero()
    } else {
        STANDARD_SHIPPING_RATE
    }
}

/// Derived cart aggregates.
///
/// Always recomputed from the current lines, never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CartTotals {
    /// Sum of all line quantities.
    pub item_count: i64,
    /// Sum of unit price times quantity over all lines.
    pub subtotal: Money,
    /// Shipping cost for this subtotal.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub total: Money,
}

impl CartTotals {
    /// Compute aggregates for a sequence of lines.
    pub fn compute(items: &[LineItem]) -> Self {
        let item_count = items.iter().map(|i| i.quantity).sum();
        let subtotal = items
            .iter()
            .fold(Money::zero(), |acc, i| acc + i.line_total());
        let shipping = shipping_for(subtotal);

        Self {
            item_count,
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }

    /// Check if this order qualified for free shipping.
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, price_cents: i64, quantity: i64) -> LineItem {
        LineItem::new(name, "p.png", Money::from_cents(price_cents), quantity)
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let totals = CartTotals::compute(&[]);
        assert_eq!(totals.item_count, 0);
        assert_eq!(totals.subtotal, Money::zero());
        assert_eq!(totals.shipping, Money::zero());
        assert_eq!(totals.total, Money::zero());
    }

    #[test]
    fn test_shipping_free_at_exactly_threshold() {
        // [{A, $10, qty 2}, {B, $30, qty 1}] lands exactly on $50.00.
        let items = [line("A", 1000, 2), line("B", 3000, 1)];
        let totals = CartTotals::compute(&items);

        assert_eq!(totals.subtotal, Money::from_cents(5000));
        assert_eq!(totals.shipping, Money::zero());
        assert_eq!(totals.total, Money::from_cents(5000));
    }

    #[test]
    fn test_shipping_charged_below_threshold() {
        let items = [line("A", 1000, 1)];
        let totals = CartTotals::compute(&items);

        assert_eq!(totals.subtotal, Money::from_cents(1000));
        assert_eq!(totals.shipping, STANDARD_SHIPPING_RATE);
        assert_eq!(totals.total, Money::from_cents(1599));
    }

    #[test]
    fn test_total_equals_subtotal_plus_shipping() {
        let cases: &[&[LineItem]] = &[
            &[],
            &[line("A", 1000, 1)],
            &[line("A", 1000, 2), line("B", 3000, 1)],
            &[line("A", 2200, 3), line("B", 1700, 2)],
        ];

        for items in cases {
            let totals = CartTotals::compute(items);
            assert_eq!(totals.total, totals.subtotal + totals.shipping);
        }
    }

    #[test]
    fn test_shipping_zero_iff_empty_or_over_threshold() {
        assert_eq!(shipping_for(Money::zero()), Money::zero());
        assert_eq!(shipping_for(Money::from_cents(1)), STANDARD_SHIPPING_RATE);
        assert_eq!(shipping_for(Money::from_cents(4999)), STANDARD_SHIPPING_RATE);
        assert_eq!(shipping_for(Money::from_cents(5000)), Money::zero());
        assert_eq!(shipping_for(Money::from_cents(9000)), Money::zero());
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let items = [line("A", 1500, 2), line("B", 2000, 5)];
        assert_eq!(CartTotals::compute(&items).item_count, 7);
    }
}
