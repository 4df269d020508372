//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in cart and checkout operations.
///
/// Checkout validation is all-or-nothing: the messages below are the exact
/// blocking messages shown to the shopper, without naming which field is
/// missing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// A required checkout field is empty.
    #[error("Please fill in all required fields.")]
    MissingRequiredFields,

    /// Card payment selected but the card details are incomplete.
    #[error("Please fill complete card details.")]
    IncompleteCardDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocking_messages() {
        assert_eq!(
            CommerceError::MissingRequiredFields.to_string(),
            "Please fill in all required fields."
        );
        assert_eq!(
            CommerceError::IncompleteCardDetails.to_string(),
            "Please fill complete card details."
        );
    }
}
