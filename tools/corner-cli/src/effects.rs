//! Terminal rendering of widget effects.
//!
//! The widget crates hand presentation work back as effect batches; this
//! is the CLI's render target for them. Immediate effects print right
//! away, deferred ones print after their delay so the session keeps the
//! page's pacing (toast lingering, the two-phase scroll).

use std::time::Duration;

use corner_widgets::page::{CatalogPage, UNTITLED_CARD};
use corner_widgets::{CardRef, Effects, UiEffect};

use crate::output::Output;

/// How a single effect shows up in the terminal.
enum Line {
    Success(String),
    Info(String),
    Debug(String),
}

fn describe(effect: &UiEffect, page: &CatalogPage) -> Line {
    match effect {
        UiEffect::ShowToast(msg) => Line::Success(msg.clone()),
        UiEffect::DismissToast => Line::Debug("toast dismissed".to_string()),
        UiEffect::ScrollToLandmark(section) => Line::Info(format!("Scrolling to #{}", section)),
        UiEffect::ScrollToCard(card) => Line::Info(format!("Showing {}", card_title(page, *card))),
        UiEffect::HighlightCard(card) => {
            Line::Info(format!("Highlighting {}", card_title(page, *card)))
        }
        UiEffect::UnhighlightCard(card) => {
            Line::Debug(format!("highlight cleared on {}", card_title(page, *card)))
        }
        UiEffect::FocusInput(_) => Line::Debug("search input focused".to_string()),
        UiEffect::BlurInput(_) => Line::Debug("search input blurred".to_string()),
        UiEffect::HideTrigger(_) => Line::Debug("add button hidden".to_string()),
        UiEffect::ShowTrigger(_) => Line::Debug("add button restored".to_string()),
        UiEffect::MountEditor(_) => Line::Debug("quantity editor opened".to_string()),
        UiEffect::UnmountEditor(_) => Line::Debug("quantity editor closed".to_string()),
    }
}

fn card_title(page: &CatalogPage, card: CardRef) -> String {
    page.card(card)
        .and_then(|c| c.heading.clone())
        .unwrap_or_else(|| UNTITLED_CARD.to_string())
}

fn emit(output: &Output, line: Line) {
    match line {
        Line::Success(msg) => output.success(&msg),
        Line::Info(msg) => output.info(&msg),
        Line::Debug(msg) => output.debug(&msg),
    }
}

/// Play a batch of effects against the terminal.
///
/// Deferred effects run in delay order. Once every remaining effect would
/// only print at debug level and verbose is off, the waits are skipped.
pub async fn play(output: &Output, page: &CatalogPage, effects: Effects) {
    for effect in &effects.immediate {
        emit(output, describe(effect, page));
    }

    let mut deferred = effects.deferred;
    deferred.sort_by_key(|d| d.after);

    let timed_until = if output.is_verbose() {
        deferred.len()
    } else {
        deferred
            .iter()
            .rposition(|d| !matches!(describe(&d.effect, page), Line::Debug(_)))
            .map_or(0, |i| i + 1)
    };

    let mut elapsed = Duration::ZERO;
    for (i, step) in deferred.into_iter().enumerate() {
        if i < timed_until {
            tokio::time::sleep(step.after.saturating_sub(elapsed)).await;
            elapsed = step.after;
        }
        emit(output, describe(&step.effect, page));
    }
}
