//! Snapshot of the four field values read at one instant

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Current values of the payment form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub card_number: String,
    pub expiry_date: String,
    pub cvc: String,
    pub email: String,
}

impl Snapshot {
    pub fn new(
        card_number: impl Into<String>,
        expiry_date: impl Into<String>,
        cvc: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiry_date: expiry_date.into(),
            cvc: cvc.into(),
            email: email.into(),
        }
    }

    /// Build a snapshot by reading each field through `read`
    pub fn read_with<F>(mut read: F) -> Self
    where
        F: FnMut(Field) -> String,
    {
        Self {
            card_number: read(Field::CardNumber),
            expiry_date: read(Field::ExpiryDate),
            cvc: read(Field::Cvc),
            email: read(Field::Email),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::CardNumber => &self.card_number,
            Field::ExpiryDate => &self.expiry_date,
            Field::Cvc => &self.cvc,
            Field::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::CardNumber => &mut self.card_number,
            Field::ExpiryDate => &mut self.expiry_date,
            Field::Cvc => &mut self.cvc,
            Field::Email => &mut self.email,
        };
        *slot = value.into();
    }
}
