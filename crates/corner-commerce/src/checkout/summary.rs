//! Order summary shown on the checkout page.

use crate::cart::{Cart, CartTotals};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One summary row: "2 × Arabian Coffee Beans" and its line total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryLine {
    /// Quantity-and-name label.
    pub label: String,
    /// Line total (unit price times quantity).
    pub amount: Money,
}

/// The checkout summary: per-line rows plus the aggregates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// One row per cart line, in cart order.
    pub lines: Vec<SummaryLine>,
    /// Derived aggregates for the whole order.
    pub totals: CartTotals,
}

impl OrderSummary {
    /// Build the summary from the current cart.
    pub fn from_cart(cart: &Cart) -> Self {
        let lines = cart
            .items
            .iter()
            .map(|item| SummaryLine {
                label: format!("{} × {}", item.quantity, item.name),
                amount: item.line_total(),
            })
            .collect();

        Self {
            lines,
            totals: CartTotals::compute(&cart.items),
        }
    }

    /// Shipping as shown to the shopper: "Free" when it costs nothing.
    pub fn shipping_display(&self) -> String {
        if self.totals.shipping.is_zero() {
            "Free".to_string()
        } else {
            self.totals.shipping.display()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lines_follow_cart_order() {
        let mut cart = Cart::new();
        cart.add("Arabian Coffee Beans", "p1.png", Money::from_cents(1500), 2);
        cart.add("French Coffee Beans", "p4.png", Money::from_cents(2200), 1);

        let summary = OrderSummary::from_cart(&cart);
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].label, "2 × Arabian Coffee Beans");
        assert_eq!(summary.lines[0].amount, Money::from_cents(3000));
        assert_eq!(summary.lines[1].label, "1 × French Coffee Beans");
    }

    #[test]
    fn test_free_shipping_display() {
        let mut cart = Cart::new();
        cart.add("German Coffee Beans", "p3.png", Money::from_cents(2000), 3);

        let summary = OrderSummary::from_cart(&cart);
        assert_eq!(summary.totals.subtotal, Money::from_cents(6000));
        assert_eq!(summary.shipping_display(), "Free");
    }

    #[test]
    fn test_paid_shipping_display() {
        let mut cart = Cart::new();
        cart.add("Arabian Coffee Beans", "p1.png", Money::from_cents(1500), 1);

        let summary = OrderSummary::from_cart(&cart);
        assert_eq!(summary.shipping_display(), "$5.99");
        assert_eq!(summary.totals.total, Money::from_cents(2099));
    }

    #[test]
    fn test_empty_cart_summary() {
        let summary = OrderSummary::from_cart(&Cart::new());
        assert!(summary.lines.is_empty());
        assert_eq!(summary.totals.total, Money::zero());
        assert_eq!(summary.shipping_display(), "Free");
    }
}
