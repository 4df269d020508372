//! Search wrapper shell.
//!
//! The shell tracks which search wrappers are expanded, separately from
//! the suggestion list's own visibility. Opening a wrapper focuses its
//! input after a short delay so the expand animation lands first;
//! closing blurs immediately. Escape and clicks outside any wrapper
//! collapse everything at once.

use std::collections::BTreeSet;
use std::time::Duration;

use crate::effect::{Effects, UiEffect};
use crate::suggest::WidgetId;

/// Delay before focusing the input of a freshly opened wrapper.
pub const FOCUS_DELAY: Duration = Duration::from_millis(50);

/// Expanded/collapsed state for every search wrapper on the page.
#[derive(Debug, Default)]
pub struct SearchShell {
    active: BTreeSet<WidgetId>,
}

impl SearchShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// The search button: expand a collapsed wrapper, collapse an
    /// expanded one.
    pub fn toggle(&mut self, widget: WidgetId) -> Effects {
        if self.active.contains(&widget) {
            self.close(widget)
        } else {
            self.open(widget)
        }
    }

    /// Expand one wrapper, focusing its input after [`FOCUS_DELAY`].
    pub fn open(&mut self, widget: WidgetId) -> Effects {
        self.active.insert(widget);
        let mut effects = Effects::none();
        effects.defer(FOCUS_DELAY, UiEffect::FocusInput(widget));
        effects
    }

    /// Collapse one wrapper, blurring its input immediately.
    pub fn close(&mut self, widget: WidgetId) -> Effects {
        self.active.remove(&widget);
        Effects::now(UiEffect::BlurInput(widget))
    }

    /// Record that a wrapper collapsed without claiming its blur.
    ///
    /// The suggestion list blurs the input itself when a row activates or
    /// Escape lands there; the shell only has to stop tracking the
    /// wrapper, or the next toggle would close an already-closed one.
    pub fn collapse(&mut self, widget: WidgetId) {
        self.active.remove(&widget);
    }

    /// Escape collapses every expanded wrapper.
    pub fn escape(&mut self) -> Effects {
        self.collapse_all()
    }

    /// A click landing outside any wrapper collapses them all.
    pub fn outside_click(&mut self) -> Effects {
        self.collapse_all()
    }

    fn collapse_all(&mut self) -> Effects {
        let mut effects = Effects::none();
        for widget in std::mem::take(&mut self.active) {
            effects.push(UiEffect::BlurInput(widget));
        }
        effects
    }

    pub fn is_active(&self, widget: WidgetId) -> bool {
        self.active.contains(&widget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_then_closes() {
        let mut shell = SearchShell::new();
        let widget = WidgetId(0);

        let effects = shell.toggle(widget);
        assert!(shell.is_active(widget));
        assert!(effects.immediate.is_empty());
        assert_eq!(effects.deferred.len(), 1);
        assert_eq!(effects.deferred[0].after, FOCUS_DELAY);
        assert_eq!(effects.deferred[0].effect, UiEffect::FocusInput(widget));

        let effects = shell.toggle(widget);
        assert!(!shell.is_active(widget));
        assert_eq!(effects.immediate, vec![UiEffect::BlurInput(widget)]);
        assert!(effects.deferred.is_empty());
    }

    #[test]
    fn test_collapse_tracks_state_without_a_second_blur() {
        let mut shell = SearchShell::new();
        let widget = WidgetId(0);
        shell.open(widget);

        // The suggestion list already blurred the input; the shell just
        // stops tracking the wrapper.
        shell.collapse(widget);
        assert!(!shell.is_active(widget));

        // The next toggle opens again instead of emitting a stray blur.
        let effects = shell.toggle(widget);
        assert!(shell.is_active(widget));
        assert!(effects.immediate.is_empty());
        assert_eq!(effects.deferred[0].effect, UiEffect::FocusInput(widget));
    }

    #[test]
    fn test_escape_collapses_every_wrapper() {
        let mut shell = SearchShell::new();
        shell.open(WidgetId(0));
        shell.open(WidgetId(1));

        let effects = shell.escape();

        assert!(!shell.is_active(WidgetId(0)));
        assert!(!shell.is_active(WidgetId(1)));
        assert_eq!(
            effects.immediate,
            vec![UiEffect::BlurInput(WidgetId(0)), UiEffect::BlurInput(WidgetId(1))]
        );
    }

    #[test]
    fn test_outside_click_collapses_like_escape() {
        let mut shell = SearchShell::new();
        shell.open(WidgetId(2));

        let effects = shell.outside_click();
        assert_eq!(effects.immediate, vec![UiEffect::BlurInput(WidgetId(2))]);

        // Nothing open, nothing to do.
        assert!(shell.outside_click().is_empty());
    }
}
