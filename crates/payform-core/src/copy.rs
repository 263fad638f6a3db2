// File: src/copy.rs
// Purpose: User-visible strings of the payment form (labels, button, messages)

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Labels and error messages shown by the form.
///
/// Every key is optional when deserializing; missing keys keep the default text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormCopy {
    pub card_number_label: String,
    pub expiry_date_label: String,
    pub cvc_label: String,
    pub email_label: String,
    pub submit_label: String,

    pub card_number_message: String,
    pub expiry_date_message: String,
    pub cvc_message: String,
    pub email_message: String,
}

impl Default for FormCopy {
    fn default() -> Self {
        Self {
            card_number_label: "Card number:".to_string(),
            expiry_date_label: "Expiry date (MM/YY):".to_string(),
            cvc_label: "CVC/CVV:".to_string(),
            email_label: "Email:".to_string(),
            submit_label: "Pay".to_string(),

            card_number_message: "invalid card number".to_string(),
            expiry_date_message: "invalid date".to_string(),
            cvc_message: "enter 3 digits".to_string(),
            email_message: "invalid email".to_string(),
        }
    }
}

impl FormCopy {
    pub fn label(&self, field: Field) -> &str {
        match field {
            Field::CardNumber => &self.card_number_label,
            Field::ExpiryDate => &self.expiry_date_label,
            Field::Cvc => &self.cvc_label,
            Field::Email => &self.email_label,
        }
    }

    /// Message shown when `field` fails its rule
    pub fn message(&self, field: Field) -> &str {
        match field {
            Field::CardNumber => &self.card_number_message,
            Field::ExpiryDate => &self.expiry_date_message,
            Field::Cvc => &self.cvc_message,
            Field::Email => &self.email_message,
        }
    }
}
