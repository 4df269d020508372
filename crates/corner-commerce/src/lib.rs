//! Commerce domain types and logic for the CornerShop cart engine.
//!
//! This crate holds the pure domain: money, the cart and its aggregates,
//! the product catalog, checkout validation, and the view models handed
//! to render targets. Persistence and cross-context synchronization live
//! in `corner-store`; the interactive widgets live in `corner-widgets`.
//!
//! # Example
//!
//! ```
//! use corner_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add("Arabian Coffee Beans", "p1.png", Money::from_cents(1500), 2);
//! cart.add("Arabian Coffee Beans", "p1.png", Money::from_cents(1500), 1);
//!
//! // Repeated adds merge into one line.
//! assert_eq!(cart.unique_item_count(), 1);
//!
//! let totals = CartTotals::compute(&cart.items);
//! assert_eq!(totals.subtotal.display(), "$45.00");
//! ```

pub mod error;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod view;

pub use error::CommerceError;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::money::Money;

    // Cart
    pub use crate::cart::{
        Cart, CartTotals, LineItem, FREE_SHIPPING_THRESHOLD, MAX_QUANTITY, MIN_QUANTITY,
        STANDARD_SHIPPING_RATE,
    };

    // Catalog
    pub use crate::catalog::{recommendations, Product};

    // Checkout
    pub use crate::checkout::{
        CardDetails, CheckoutForm, OrderSummary, PaymentMethod, SummaryLine, ORDER_PLACED_MESSAGE,
    };

    // Views
    pub use crate::view::{badge_text, escape_html, CartPageView, CartRow, Page};
}
