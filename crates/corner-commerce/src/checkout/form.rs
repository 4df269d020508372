//! Checkout form and its validation.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// How the shopper pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    /// Credit or debit card; requires card details.
    #[default]
    Card,
    /// Pay the courier on delivery.
    CashOnDelivery,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::CashOnDelivery => "cod",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit / Debit Card",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }
}

/// Card fields collected when paying by card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CardDetails {
    /// Card number.
    pub number: String,
    /// Expiry (MM/YY).
    pub expiry: String,
    /// Security code.
    pub cvv: String,
}

impl CardDetails {
    /// Check that every card field is filled in.
    pub fn is_complete(&self) -> bool {
        !self.number.trim().is_empty()
            && !self.expiry.trim().is_empty()
            && !self.cvv.trim().is_empty()
    }
}

/// The checkout form as the shopper filled it in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CheckoutForm {
    /// Full name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Postal/ZIP code.
    pub zip: String,
    /// Selected payment method.
    pub payment: PaymentMethod,
    /// Card details, when paying by card.
    pub card: Option<CardDetails>,
}

impl CheckoutForm {
    /// Validate the form in one synchronous, all-or-nothing check.
    ///
    /// Any missing required field yields the single blocking message; the
    /// check does not enumerate which fields are missing. Card payment
    /// additionally requires complete card details.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let required = [
            &self.full_name,
            &self.email,
            &self.phone,
            &self.address,
            &self.city,
            &self.zip,
        ];
        if required.iter().any(|f| f.trim().is_empty()) {
            return Err(CommerceError::MissingRequiredFields);
        }

        if self.payment == PaymentMethod::Card {
            let complete = self.card.as_ref().map(|c| c.is_complete()).unwrap_or(false);
            if !complete {
                return Err(CommerceError::IncompleteCardDetails);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> CheckoutForm {
        CheckoutForm {
            full_name: "Jordan Doe".to_string(),
            email: "jordan@example.com".to_string(),
            phone: "555-0100".to_string(),
            address: "12 Roast Road".to_string(),
            city: "Beanville".to_string(),
            zip: "90210".to_string(),
            payment: PaymentMethod::CashOnDelivery,
            card: None,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn test_any_missing_field_yields_single_message() {
        let blank_each: Vec<CheckoutForm> = (0..6)
            .map(|i| {
                let mut form = filled_form();
                match i {
                    0 => form.full_name.clear(),
                    1 => form.email.clear(),
                    2 => form.phone.clear(),
                    3 => form.address.clear(),
                    4 => form.city.clear(),
                    _ => form.zip.clear(),
                }
                form
            })
            .collect();

        for form in blank_each {
            assert_eq!(
                form.validate(),
                Err(CommerceError::MissingRequiredFields)
            );
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut form = filled_form();
        form.city = "   ".to_string();
        assert_eq!(form.validate(), Err(CommerceError::MissingRequiredFields));
    }

    #[test]
    fn test_card_payment_requires_card_details() {
        let mut form = filled_form();
        form.payment = PaymentMethod::Card;
        form.card = None;
        assert_eq!(form.validate(), Err(CommerceError::IncompleteCardDetails));

        form.card = Some(CardDetails {
            number: "4242 4242 4242 4242".to_string(),
            expiry: "12/27".to_string(),
            cvv: String::new(),
        });
        assert_eq!(form.validate(), Err(CommerceError::IncompleteCardDetails));

        form.card = Some(CardDetails {
            number: "4242 4242 4242 4242".to_string(),
            expiry: "12/27".to_string(),
            cvv: "123".to_string(),
        });
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_cash_on_delivery_ignores_card_details() {
        let mut form = filled_form();
        form.payment = PaymentMethod::CashOnDelivery;
        form.card = None;
        assert!(form.validate().is_ok());
    }
}
