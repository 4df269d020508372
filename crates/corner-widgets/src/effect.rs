//! UI effects emitted by widget operations.
//!
//! Widgets are pure state machines: an operation mutates widget state and
//! returns the presentation work as data. The host executes immediate
//! effects right away and deferred ones after their delay, in order. This
//! keeps every timed behavior (toast dismissal, the two-phase scroll)
//! testable without a clock.

use std::time::Duration;

use crate::page::CardRef;
use crate::suggest::WidgetId;
use crate::trigger::TriggerId;

/// One presentation instruction for the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Hide the trigger control while its editor is mounted.
    HideTrigger(TriggerId),
    /// Restore the trigger control.
    ShowTrigger(TriggerId),
    /// Mount a quantity editor next to the trigger.
    MountEditor(TriggerId),
    /// Tear the quantity editor down.
    UnmountEditor(TriggerId),
    /// Show a transient confirmation message.
    ShowToast(String),
    /// Dismiss the visible confirmation message.
    DismissToast,
    /// Smooth-scroll to a named page landmark.
    ScrollToLandmark(String),
    /// Smooth-scroll a catalog card into view.
    ScrollToCard(CardRef),
    /// Transiently highlight a catalog card.
    HighlightCard(CardRef),
    /// Remove the transient card highlight.
    UnhighlightCard(CardRef),
    /// Give keyboard focus to a search input.
    FocusInput(WidgetId),
    /// Drop keyboard focus from a search input.
    BlurInput(WidgetId),
}

/// An effect the host should run after a delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deferred {
    pub after: Duration,
    pub effect: UiEffect,
}

/// The full outcome of one widget operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Effects {
    /// Run these now, in order.
    pub immediate: Vec<UiEffect>,
    /// Run each of these once its delay elapses. Delays are measured from
    /// the operation, not from each other.
    pub deferred: Vec<Deferred>,
}

impl Effects {
    /// No presentation work.
    pub fn none() -> Self {
        Self::default()
    }

    /// A single immediate effect.
    pub fn now(effect: UiEffect) -> Self {
        Self {
            immediate: vec![effect],
            deferred: Vec::new(),
        }
    }

    /// Append an immediate effect.
    pub fn push(&mut self, effect: UiEffect) {
        self.immediate.push(effect);
    }

    /// Append an effect to run `after` the operation.
    pub fn defer(&mut self, after: Duration, effect: UiEffect) {
        self.deferred.push(Deferred { after, effect });
    }

    /// Append all of `other`'s work after this one's.
    pub fn merge(&mut self, other: Effects) {
        self.immediate.extend(other.immediate);
        self.deferred.extend(other.deferred);
    }

    /// True when there is nothing to run.
    pub fn is_empty(&self) -> bool {
        self.immediate.is_empty() && self.deferred.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effects_accumulate_in_order() {
        let mut effects = Effects::now(UiEffect::DismissToast);
        effects.push(UiEffect::ShowToast("hi".to_string()));
        effects.defer(Duration::from_millis(100), UiEffect::DismissToast);

        assert_eq!(
            effects.immediate,
            vec![
                UiEffect::DismissToast,
                UiEffect::ShowToast("hi".to_string())
            ]
        );
        assert_eq!(effects.deferred.len(), 1);
        assert_eq!(effects.deferred[0].after, Duration::from_millis(100));
    }

    #[test]
    fn test_merge_preserves_both_sides() {
        let mut first = Effects::now(UiEffect::DismissToast);
        let mut second = Effects::none();
        second.defer(Duration::from_millis(50), UiEffect::DismissToast);

        first.merge(second);
        assert_eq!(first.immediate.len(), 1);
        assert_eq!(first.deferred.len(), 1);
        assert!(!first.is_empty());
        assert!(Effects::none().is_empty());
    }
}
