//! Product catalog.
//!
//! The shop's products are small and static: the storefront pages carry
//! them in their markup, and the cart page carries a fixed recommendation
//! list. This module holds the shared product shape plus that built-in
//! recommendation set.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product as the shop sells it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Display name (also the cart merge key).
    pub name: String,
    /// Image reference.
    pub image: String,
    /// Unit price.
    pub price: Money,
}

impl Product {
    /// Create a product.
    pub fn new(name: impl Into<String>, image: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            price,
        }
    }
}

/// The recommendation list shown on the cart page.
pub fn recommendations() -> Vec<Product> {
    vec![
        Product::new("Arabian Coffee Beans", "p1.png", Money::from_cents(1500)),
        Product::new("German Coffee Beans", "p3.png", Money::from_cents(2000)),
        Product::new("French Coffee Beans", "p4.png", Money::from_cents(2200)),
        Product::new("English Coffee Beans", "p5.png", Money::from_cents(1700)),
    ]
}
