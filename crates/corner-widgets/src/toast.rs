//! Transient confirmation toasts.

use std::time::Duration;

use crate::effect::{Effects, UiEffect};

/// How long a toast stays visible before dismissing itself.
pub const AUTO_DISMISS: Duration = Duration::from_millis(1200);

/// The "N × name added" confirmation text.
pub fn added_message(quantity: i64, name: &str) -> String {
    format!("{} × {} added", quantity, name)
}

/// Show a toast now and dismiss it after [`AUTO_DISMISS`].
pub fn confirmation(message: impl Into<String>) -> Effects {
    let mut effects = Effects::now(UiEffect::ShowToast(message.into()));
    effects.defer(AUTO_DISMISS, UiEffect::DismissToast);
    effects
}
