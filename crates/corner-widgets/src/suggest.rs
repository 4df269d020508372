//! Type-ahead product suggestions.
//!
//! [`SuggestionIndex::build`] scans the rendered catalog once into plain
//! descriptors; [`SuggestionController`] then drives any number of
//! suggestion widgets over that index. Widgets open and close
//! independently, but activating a row or clicking outside collapses
//! them all.

use std::time::Duration;

use corner_commerce::money::Money;
use serde::Serialize;

use crate::effect::{Effects, UiEffect};
use crate::page::{self, CardRef, CatalogPage, PRODUCTS_LANDMARK, UNTITLED_CARD};

/// Display cap for the unfiltered suggestion list.
pub const DISPLAY_CAP: usize = 50;

/// Empty-state row text when a query matches nothing.
pub const EMPTY_STATE: &str = "No products found";

/// Delay before the second scroll phase, letting the first settle.
pub const SCROLL_SETTLE: Duration = Duration::from_millis(600);

/// How long the activated card stays highlighted.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(1000);

/// One searchable product scanned from the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDescriptor {
    pub title: String,
    /// Image reference parsed from the card's background style. Empty
    /// when the card rendered without artwork.
    pub image: String,
    pub price: Option<Money>,
    /// Back-reference to the card this was scanned from. Lookup only.
    #[serde(skip)]
    pub source: CardRef,
}

impl ProductDescriptor {
    /// Price text for a suggestion row. Absent and zero prices both
    /// render without one.
    pub fn display_price(&self) -> Option<String> {
        match self.price {
            Some(price) if !price.is_zero() => Some(price.display()),
            _ => None,
        }
    }
}

/// Ordered product descriptors scanned once from the page.
pub struct SuggestionIndex {
    products: Vec<ProductDescriptor>,
    landmark_present: bool,
}

impl SuggestionIndex {
    /// Scan the rendered catalog.
    ///
    /// Card order is preserved. A card without a heading indexes under
    /// the generic title; missing artwork leaves the image reference
    /// empty; an unparsable price attribute indexes as priceless.
    pub fn build(page: &CatalogPage) -> Self {
        let products = page
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let title = card
                    .heading
                    .as_deref()
                    .map(|heading| heading.trim().to_string())
                    .unwrap_or_else(|| UNTITLED_CARD.to_string());
                let image = card
                    .image_style
                    .as_deref()
                    .and_then(page::parse_background_image)
                    .unwrap_or_default();
                let price = card.price_attr.as_deref().and_then(page::parse_price_attr);
                ProductDescriptor {
                    title,
                    image,
                    price,
                    source: CardRef(index),
                }
            })
            .collect();

        Self {
            products,
            landmark_present: page.has_section(PRODUCTS_LANDMARK),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[ProductDescriptor] {
        &self.products
    }

    /// Case-insensitive substring match on titles.
    ///
    /// An empty (or all-whitespace) query returns the first
    /// [`DISPLAY_CAP`] entries; a real query matches without a cap.
    pub fn filter(&self, query: &str) -> Vec<ProductDescriptor> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.products.iter().take(DISPLAY_CAP).cloned().collect();
        }
        self.products
            .iter()
            .filter(|product| product.title.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

/// Identifies one suggestion widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub usize);

/// Keys the suggestion list reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// State of one suggestion widget.
#[derive(Debug, Clone)]
pub struct SuggestionWidget {
    query: String,
    results: Vec<ProductDescriptor>,
    /// -1 means nothing highlighted yet.
    highlight: isize,
    open: bool,
}

impl SuggestionWidget {
    fn new() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            highlight: -1,
            open: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[ProductDescriptor] {
        &self.results
    }

    pub fn highlight(&self) -> isize {
        self.highlight
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Drives every suggestion widget on a page over one shared index.
pub struct SuggestionController {
    index: SuggestionIndex,
    widgets: Vec<SuggestionWidget>,
}

impl SuggestionController {
    pub fn new(index: SuggestionIndex) -> Self {
        Self {
            index,
            widgets: Vec::new(),
        }
    }

    /// Add a widget instance. Starts closed with an empty query.
    pub fn register(&mut self) -> WidgetId {
        self.widgets.push(SuggestionWidget::new());
        WidgetId(self.widgets.len() - 1)
    }

    pub fn widget(&self, id: WidgetId) -> Option<&SuggestionWidget> {
        self.widgets.get(id.0)
    }

    pub fn index(&self) -> &SuggestionIndex {
        &self.index
    }

    /// Open a widget, refreshing results for its current query. The
    /// highlight is left alone (the hover path).
    pub fn open(&mut self, id: WidgetId) {
        if let Some(widget) = self.widgets.get_mut(id.0) {
            widget.open = true;
            widget.results = self.index.filter(&widget.query);
        }
    }

    /// Input focus: open with results refreshed for the current query.
    /// The highlight carries over; only a query change resets it.
    pub fn focus(&mut self, id: WidgetId) {
        self.open(id);
    }

    /// Replace the query, refreshing results and resetting navigation.
    pub fn input(&mut self, id: WidgetId, text: &str) {
        if let Some(widget) = self.widgets.get_mut(id.0) {
            widget.query = text.to_string();
            widget.results = self.index.filter(&widget.query);
            widget.highlight = -1;
        }
    }

    pub fn close(&mut self, id: WidgetId) {
        if let Some(widget) = self.widgets.get_mut(id.0) {
            widget.open = false;
        }
    }

    /// Collapse every widget, as an outside interaction does.
    pub fn close_all(&mut self) {
        for widget in &mut self.widgets {
            widget.open = false;
        }
    }

    /// Keyboard dispatch for the focused widget.
    ///
    /// With no result rows (the empty-state row is not navigable) every
    /// key is a no-op here; the search shell still owns Escape at the
    /// page level. ArrowUp floors at 0 rather than returning to -1, so
    /// once navigation begins the top row stays reachable but the
    /// "nothing highlighted" state is not.
    pub fn key(&mut self, id: WidgetId, key: Key) -> Effects {
        let Some(widget) = self.widgets.get_mut(id.0) else {
            return Effects::none();
        };
        if widget.results.is_empty() {
            return Effects::none();
        }

        let last = widget.results.len() as isize - 1;
        match key {
            Key::ArrowDown => {
                widget.highlight = (widget.highlight + 1).min(last);
                Effects::none()
            }
            Key::ArrowUp => {
                widget.highlight = (widget.highlight - 1).max(0);
                Effects::none()
            }
            Key::Enter => {
                let index = if widget.highlight >= 0 {
                    widget.highlight as usize
                } else {
                    0
                };
                self.activate(id, index)
            }
            Key::Escape => {
                widget.open = false;
                Effects::now(UiEffect::BlurInput(id))
            }
        }
    }

    /// Activate the result row at `index` (a click or Enter).
    ///
    /// Collapses every widget, then emits the two-phase scroll: land on
    /// the products section now, and once that settles scroll to the
    /// originating card and flash it.
    pub fn activate(&mut self, id: WidgetId, index: usize) -> Effects {
        let Some(product) = self
            .widgets
            .get(id.0)
            .and_then(|widget| widget.results.get(index))
            .cloned()
        else {
            return Effects::none();
        };

        self.close_all();

        let mut effects = Effects::none();
        if self.index.landmark_present {
            effects.push(UiEffect::ScrollToLandmark(PRODUCTS_LANDMARK.to_string()));
        } else {
            tracing::warn!(
                section = PRODUCTS_LANDMARK,
                "landmark section missing, skipping scroll"
            );
        }
        effects.defer(SCROLL_SETTLE, UiEffect::ScrollToCard(product.source));
        effects.defer(SCROLL_SETTLE, UiEffect::HighlightCard(product.source));
        effects.defer(
            SCROLL_SETTLE + HIGHLIGHT_DURATION,
            UiEffect::UnhighlightCard(product.source),
        );
        effects.push(UiEffect::BlurInput(id));
        effects
    }
}
