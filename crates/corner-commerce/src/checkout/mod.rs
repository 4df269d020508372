//! Checkout: the form, its validation, and the order summary.

mod form;
mod summary;

pub use form::{CardDetails, CheckoutForm, PaymentMethod};
pub use summary::{OrderSummary, SummaryLine};

/// Confirmation shown once an order is placed.
pub const ORDER_PLACED_MESSAGE: &str =
    "🎉 Order placed successfully!\n\nThank you for shopping at The Coffee Corner!";
