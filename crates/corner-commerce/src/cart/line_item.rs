//! Cart line items.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY: i64 = 999;

/// Minimum quantity for a line that stays in the cart.
pub const MIN_QUANTITY: i64 = 1;

/// Clamp a requested quantity into the allowed range.
pub fn clamp_quantity(quantity: i64) -> i64 {
    quantity.clamp(MIN_QUANTITY, MAX_QUANTITY)
}

/// A line in the cart.
///
/// Lines are keyed by product name: the cart holds at most one line per
/// distinct name and merges repeated adds into it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product name (the merge key).
    pub name: String,
    /// Product image reference.
    pub image: String,
    /// Unit price. Non-negative.
    pub unit_price: Money,
    /// Quantity in [1, 999].
    pub quantity: i64,
}

impl LineItem {
    /// Create a line item, clamping the quantity into range and flooring a
    /// negative unit price at zero.
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> Self {
        let name = name.into();
        let unit_price = if unit_price.is_negative() {
            tracing::warn!(product = %name, "negative unit price clamped to zero");
            Money::zero()
        } else {
            unit_price
        };
        Self {
            name,
            image: image.into(),
            unit_price,
            quantity: clamp_quantity(quantity),
        }
    }

    /// Line total (unit price times quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity(0), 1);
        assert_eq!(clamp_quantity(-5), 1);
        assert_eq!(clamp_quantity(1), 1);
        assert_eq!(clamp_quantity(500), 500);
        assert_eq!(clamp_quantity(999), 999);
        assert_eq!(clamp_quantity(1000), 999);
    }

    #[test]
    fn test_line_item_clamps_on_creation() {
        let item = LineItem::new("Arabian Coffee Beans", "p1.png", Money::from_cents(1500), 0);
        assert_eq!(item.quantity, 1);

        let item = LineItem::new("Arabian Coffee Beans", "p1.png", Money::from_cents(1500), 5000);
        assert_eq!(item.quantity, 999);
    }

    #[test]
    fn test_negative_price_floored_at_zero() {
        let item = LineItem::new("Broken", "x.png", Money::from_cents(-100), 1);
        assert_eq!(item.unit_price, Money::zero());
    }

    #[test]
    fn test_line_total() {
        let item = LineItem::new("German Coffee Beans", "p3.png", Money::from_cents(2000), 3);
        assert_eq!(item.line_total(), Money::from_cents(6000));
    }
}
