//! Rendered-page model the widgets scan and resolve against.
//!
//! Widgets never touch markup. The host describes what it rendered as a
//! [`CatalogPage`]: catalog cards, the interactive controls on the page,
//! and which landmark sections exist. Suggestion indexing and trigger
//! resolution read this description only.

use corner_commerce::money::Money;

/// Landmark the activation scroll targets first.
pub const PRODUCTS_LANDMARK: &str = "products";

/// Title used for a card that renders without a heading.
pub const UNTITLED_CARD: &str = "Product";

/// Index of a card within its [`CatalogPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardRef(pub usize);

/// One rendered catalog card.
#[derive(Debug, Clone, Default)]
pub struct CatalogCard {
    /// Heading text, if the card rendered one.
    pub heading: Option<String>,
    /// Raw style value holding the card's artwork, e.g.
    /// `background-image: url('p1.png')`.
    pub image_style: Option<String>,
    /// Raw price attribute value, if declared.
    pub price_attr: Option<String>,
}

impl CatalogCard {
    /// A card with just a heading.
    pub fn titled(heading: impl Into<String>) -> Self {
        Self {
            heading: Some(heading.into()),
            ..Self::default()
        }
    }
}

/// One interactive control on the page.
#[derive(Debug, Clone, Default)]
pub struct PageControl {
    /// Visible label text.
    pub label: String,
    /// Declared action metadata, the equivalent of an inline handler
    /// attribute naming the product it acts on.
    pub action: Option<String>,
    /// The card this control renders inside, when it has one.
    pub card: Option<usize>,
}

/// Everything the host rendered that widgets care about.
#[derive(Debug, Clone, Default)]
pub struct CatalogPage {
    pub cards: Vec<CatalogCard>,
    pub controls: Vec<PageControl>,
    /// Landmark section names present on this page.
    pub sections: Vec<String>,
}

impl CatalogPage {
    /// True when the named landmark section rendered.
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.iter().any(|s| s == name)
    }

    pub fn card(&self, index: CardRef) -> Option<&CatalogCard> {
        self.cards.get(index.0)
    }
}

/// Extract the image reference from a `background-image` style value.
///
/// Accepts `url(p1.png)`, `url('p1.png')` and `url("p1.png")`, stripping
/// at most one quote from each end.
pub fn parse_background_image(style: &str) -> Option<String> {
    let start = style.find("url(")? + 4;
    let end = start + style[start..].find(')')?;

    let inner = &style[start..end];
    let inner = inner
        .strip_prefix(|c: char| c == '"' || c == '\'')
        .unwrap_or(inner);
    let inner = inner
        .strip_suffix(|c: char| c == '"' || c == '\'')
        .unwrap_or(inner);

    if inner.is_empty() {
        None
    } else {
        Some(inner.to_string())
    }
}

/// Parse a declared price attribute into a money value.
pub fn parse_price_attr(attr: &str) -> Option<Money> {
    attr.trim().parse::<f64>().ok().map(Money::from_decimal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_background_image_quote_styles() {
        for style in [
            "background-image: url(p1.png)",
            "background-image: url('p1.png')",
            "background-image: url(\"p1.png\")",
        ] {
            assert_eq!(parse_background_image(style).as_deref(), Some("p1.png"));
        }
    }

    #[test]
    fn test_parse_background_image_rejects_empty() {
        assert_eq!(parse_background_image("background-image: url()"), None);
        assert_eq!(parse_background_image("color: red"), None);
        assert_eq!(parse_background_image(""), None);
    }

    #[test]
    fn test_parse_price_attr() {
        assert_eq!(parse_price_attr("15"), Some(Money::from_cents(1500)));
        assert_eq!(parse_price_attr(" 19.99 "), Some(Money::from_cents(1999)));
        assert_eq!(parse_price_attr(""), None);
        assert_eq!(parse_price_attr("not-a-price"), None);
    }

    #[test]
    fn test_has_section() {
        let page = CatalogPage {
            sections: vec![PRODUCTS_LANDMARK.to_string()],
            ..CatalogPage::default()
        };
        assert!(page.has_section(PRODUCTS_LANDMARK));
        assert!(!page.has_section("reviews"));
    }
}
