//! Shopping cart: line items, the cart itself, aggregate pricing.

mod cart;
mod line_item;
mod pricing;

pub use cart::Cart;
pub use line_item::{clamp_quantity, LineItem, MAX_QUANTITY, MIN_QUANTITY};
pub use pricing::{shipping_for, CartTotals, FREE_SHIPPING_THRESHOLD, STANDARD_SHIPPING_RATE};
