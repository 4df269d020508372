//! Interactive widgets for the CornerShop storefront.
//!
//! Two state machines layer on top of the cart store: the inline
//! quantity editor ([`editor::InlineEditorController`]) and the
//! type-ahead suggestion widget ([`suggest::SuggestionController`]).
//! Both are host-agnostic: they mutate their own state, write to the
//! store where the behavior demands it, and hand all presentation work
//! back as [`effect::Effects`] for the host to execute.
//!
//! # Example
//!
//! ```
//! use corner_widgets::page::{CatalogCard, CatalogPage};
//! use corner_widgets::suggest::{Key, SuggestionController, SuggestionIndex};
//!
//! let page = CatalogPage {
//!     cards: vec![
//!         CatalogCard::titled("Arabian Coffee Beans"),
//!         CatalogCard::titled("German Coffee Beans"),
//!     ],
//!     ..CatalogPage::default()
//! };
//!
//! let mut suggestions = SuggestionController::new(SuggestionIndex::build(&page));
//! let widget = suggestions.register();
//!
//! suggestions.focus(widget);
//! suggestions.input(widget, "german");
//! suggestions.key(widget, Key::ArrowDown);
//!
//! let state = suggestions.widget(widget).unwrap();
//! assert_eq!(state.results().len(), 1);
//! assert_eq!(state.highlight(), 0);
//! ```

pub mod editor;
pub mod effect;
pub mod page;
pub mod search;
pub mod suggest;
pub mod toast;
pub mod trigger;

pub use editor::{EditorSession, InlineEditorController};
pub use effect::{Deferred, Effects, UiEffect};
pub use page::{CardRef, CatalogCard, CatalogPage, PageControl, PRODUCTS_LANDMARK};
pub use search::SearchShell;
pub use suggest::{
    Key, ProductDescriptor, SuggestionController, SuggestionIndex, SuggestionWidget, WidgetId,
    DISPLAY_CAP, EMPTY_STATE,
};
pub use trigger::{TriggerId, TriggerRegistry};
