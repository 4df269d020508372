//! Mapping products to the controls that add them.
//!
//! The supported path is an explicit registry filled at construction
//! time: the host knows which control it rendered for which product and
//! says so. The text-matching heuristics below exist only as a fallback
//! for pages wired the legacy way, and stay isolated here.

use std::collections::HashMap;

use crate::page::CatalogPage;

/// Generic label fallback resolution accepts as "the add control".
pub const ADD_TO_CART_LABEL: &str = "ADD TO CART";

/// Index of a control within its [`CatalogPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerId(pub usize);

/// Resolves a product name to the trigger control that adds it.
#[derive(Debug, Default)]
pub struct TriggerRegistry {
    explicit: HashMap<String, TriggerId>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare that `trigger` is the control for `product_name`.
    pub fn register(&mut self, product_name: &str, trigger: TriggerId) {
        self.explicit.insert(normalize(product_name), trigger);
    }

    /// Find the trigger for a product.
    ///
    /// The explicit registry is consulted first. Failing that, the legacy
    /// heuristics run in order: a product-name match inside a control's
    /// action metadata, then an exact match against the nearest card
    /// heading, then the first generically labelled add control. `None`
    /// means the caller should fall back to a direct add.
    pub fn resolve(&self, page: &CatalogPage, product_name: &str) -> Option<TriggerId> {
        if let Some(trigger) = self.explicit.get(&normalize(product_name)) {
            return Some(*trigger);
        }
        by_action_metadata(page, product_name)
            .or_else(|| by_nearest_heading(page, product_name))
            .or_else(|| by_add_label(page))
    }
}

/// Collapse runs of whitespace, trim, lowercase.
fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn strip_quotes(s: &str) -> String {
    s.chars().filter(|c| *c != '\'' && *c != '"').collect()
}

/// Tier one: the product name appears inside a control's declared action
/// metadata, compared case-insensitively with quotes stripped.
fn by_action_metadata(page: &CatalogPage, product_name: &str) -> Option<TriggerId> {
    let target = strip_quotes(&normalize(product_name));
    for (index, control) in page.controls.iter().enumerate() {
        let Some(action) = &control.action else {
            continue;
        };
        let cleaned = strip_quotes(&action.to_lowercase());
        if cleaned.contains(&target) {
            return Some(TriggerId(index));
        }
    }
    None
}

/// Tier two: the product name equals the heading of the card the control
/// renders inside.
fn by_nearest_heading(page: &CatalogPage, product_name: &str) -> Option<TriggerId> {
    let target = normalize(product_name);
    for (index, control) in page.controls.iter().enumerate() {
        let heading = control
            .card
            .and_then(|card| page.cards.get(card))
            .and_then(|card| card.heading.as_deref());
        if let Some(heading) = heading {
            if normalize(heading) == target {
                return Some(TriggerId(index));
            }
        }
    }
    None
}

/// Tier three: the first control carrying the generic add label.
fn by_add_label(page: &CatalogPage) -> Option<TriggerId> {
    page.controls
        .iter()
        .position(|control| control.label.trim().to_uppercase() == ADD_TO_CART_LABEL)
        .map(TriggerId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{CatalogCard, PageControl};

    fn legacy_page() -> CatalogPage {
        CatalogPage {
            cards: vec![
                CatalogCard::titled("Arabian Coffee Beans"),
                CatalogCard::titled("German Coffee Beans"),
            ],
            controls: vec![
                PageControl {
                    label: "ADD TO CART".to_string(),
                    action: Some(
                        "addToCart('Arabian Coffee Beans', 'p1.png', 15, this)".to_string(),
                    ),
                    card: Some(0),
                },
                PageControl {
                    label: "Add To Cart".to_string(),
                    action: None,
                    card: Some(1),
                },
            ],
            sections: Vec::new(),
        }
    }

    #[test]
    fn test_explicit_registration_wins() {
        let mut registry = TriggerRegistry::new();
        registry.register("Arabian Coffee Beans", TriggerId(1));

        // Heuristics would say control 0; the registry overrides.
        let resolved = registry.resolve(&legacy_page(), "Arabian Coffee Beans");
        assert_eq!(resolved, Some(TriggerId(1)));
    }

    #[test]
    fn test_action_metadata_match_is_case_and_quote_insensitive() {
        let registry = TriggerRegistry::new();
        let resolved = registry.resolve(&legacy_page(), "ARABIAN   coffee beans");
        assert_eq!(resolved, Some(TriggerId(0)));
    }

    #[test]
    fn test_nearest_heading_match() {
        let registry = TriggerRegistry::new();
        // No action metadata mentions this product, but a card heading
        // matches exactly.
        let resolved = registry.resolve(&legacy_page(), "German Coffee Beans");
        assert_eq!(resolved, Some(TriggerId(1)));
    }

    #[test]
    fn test_generic_add_label_is_last() {
        let page = CatalogPage {
            cards: Vec::new(),
            controls: vec![
                PageControl {
                    label: "Checkout".to_string(),
                    ..PageControl::default()
                },
                PageControl {
                    label: "  add to cart  ".to_string(),
                    ..PageControl::default()
                },
            ],
            sections: Vec::new(),
        };

        let registry = TriggerRegistry::new();
        let resolved = registry.resolve(&page, "Unknown Roast");
        assert_eq!(resolved, Some(TriggerId(1)));
    }

    #[test]
    fn test_unresolvable_yields_none() {
        let page = CatalogPage {
            controls: vec![PageControl {
                label: "Checkout".to_string(),
                ..PageControl::default()
            }],
            ..CatalogPage::default()
        };

        let registry = TriggerRegistry::new();
        assert_eq!(registry.resolve(&page, "Unknown Roast"), None);
    }

    #[test]
    fn test_heading_match_requires_equality_not_substring() {
        let page = CatalogPage {
            cards: vec![CatalogCard::titled("Arabian Coffee Beans Deluxe")],
            controls: vec![PageControl {
                label: "Buy".to_string(),
                action: None,
                card: Some(0),
            }],
            sections: Vec::new(),
        };

        let registry = TriggerRegistry::new();
        assert_eq!(registry.resolve(&page, "Arabian Coffee Beans"), None);
    }
}
