//! View models for the render targets.
//!
//! The engine never touches markup; it hands hosts these computed values
//! and lets them draw. Presentation details that are part of observable
//! behavior (the badge cap, the empty-cart copy) live here so every host
//! renders them the same way.

use crate::cart::{Cart, CartTotals};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Empty-cart heading on the cart page.
pub const EMPTY_CART_TITLE: &str = "Your cart is empty ☕";

/// Empty-cart hint below the heading.
pub const EMPTY_CART_HINT: &str = "Add something from our recommendations.";

/// Confirmation asked before clearing the cart.
pub const CLEAR_CART_PROMPT: &str = "Clear all items?";

/// Header badge text for a total quantity.
///
/// `None` means the badge is hidden; counts above 99 display as "99+".
pub fn badge_text(total_quantity: i64) -> Option<String> {
    if total_quantity <= 0 {
        return None;
    }
    if total_quantity > 99 {
        Some("99+".to_string())
    } else {
        Some(total_quantity.to_string())
    }
}

/// Escape a string for interpolation into markup.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Pages the shop navigates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    /// The storefront.
    Home,
    /// The cart review page.
    Cart,
    /// The checkout page.
    Checkout,
}

impl Page {
    /// Location the host navigates to.
    pub fn href(&self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Cart => "cart.html",
            Page::Checkout => "checkout.html",
        }
    }
}

/// One row of the cart line list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartRow {
    /// Position in the cart (the index mutators take).
    pub index: usize,
    /// Product name.
    pub name: String,
    /// Thumbnail image reference.
    pub image: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity on this line.
    pub quantity: i64,
    /// Unit price times quantity.
    pub line_total: Money,
}

/// Everything the cart page needs to draw.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPageView {
    /// One row per line, in cart order. Empty means the empty state.
    pub rows: Vec<CartRow>,
    /// Summary aggregates.
    pub totals: CartTotals,
}

impl CartPageView {
    /// Build the view from the current cart.
    pub fn from_cart(cart: &Cart) -> Self {
        let rows = cart
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| CartRow {
                index,
                name: item.name.clone(),
                image: item.image.clone(),
                unit_price: item.unit_price,
                quantity: item.quantity,
                line_total: item.line_total(),
            })
            .collect();

        Self {
            rows,
            totals: CartTotals::compute(&cart.items),
        }
    }

    /// Check if the page shows the empty state.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_hidden_at_zero() {
        assert_eq!(badge_text(0), None);
        assert_eq!(badge_text(-3), None);
    }

    #[test]
    fn test_badge_caps_at_99() {
        assert_eq!(badge_text(1), Some("1".to_string()));
        assert_eq!(badge_text(99), Some("99".to_string()));
        assert_eq!(badge_text(100), Some("99+".to_string()));
        assert_eq!(badge_text(450), Some("99+".to_string()));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Bold" & 'brew'</b>"#),
            "&lt;b&gt;&quot;Bold&quot; &amp; &#39;brew&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_escape_html_ampersand_first() {
        // Escaping must not double-escape entities it just produced.
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_cart_page_view_rows() {
        let mut cart = Cart::new();
        cart.add("Arabian Coffee Beans", "p1.png", Money::from_cents(1500), 2);

        let view = CartPageView::from_cart(&cart);
        assert!(!view.is_empty());
        assert_eq!(view.rows[0].index, 0);
        assert_eq!(view.rows[0].line_total, Money::from_cents(3000));
        assert_eq!(view.totals.item_count, 2);
    }

    #[test]
    fn test_cart_page_view_empty_state() {
        let view = CartPageView::from_cart(&Cart::new());
        assert!(view.is_empty());
        assert_eq!(view.totals, CartTotals::default());
    }

    #[test]
    fn test_page_hrefs() {
        assert_eq!(Page::Home.href(), "index.html");
        assert_eq!(Page::Cart.href(), "cart.html");
        assert_eq!(Page::Checkout.href(), "checkout.html");
    }
}
