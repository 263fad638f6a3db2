// File: src/field.rs
// Purpose: The four payment fields and their fixed DOM identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Id of the container element the form is mounted into
pub const APP_CONTAINER_ID: &str = "app";

/// Id of the `<form>` element
pub const FORM_ID: &str = "payment-form";

/// Id of the submit button
pub const PAY_BUTTON_ID: &str = "payButton";

/// Attribute on the container carrying the form copy as JSON (`render_page`)
pub const COPY_ATTR: &str = "data-copy";

/// Class shared by every error placeholder
pub const ERROR_CLASS: &str = "error-message";

/// A payment form field.
///
/// The serialized name is the element id, so a `Field` can be used directly
/// as a key in objects handed to JavaScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    CardNumber,
    ExpiryDate,
    Cvc,
    Email,
}

impl Field {
    /// All fields in render order
    pub const ALL: [Field; 4] = [Field::CardNumber, Field::ExpiryDate, Field::Cvc, Field::Email];

    /// Id of the `<input>` element
    pub fn id(self) -> &'static str {
        match self {
            Field::CardNumber => "cardNumber",
            Field::ExpiryDate => "expiryDate",
            Field::Cvc => "cvc",
            Field::Email => "email",
        }
    }

    /// Id of the error placeholder paired with the input
    pub fn error_id(self) -> &'static str {
        match self {
            Field::CardNumber => "cardNumberError",
            Field::ExpiryDate => "expiryDateError",
            Field::Cvc => "cvcError",
            Field::Email => "emailError",
        }
    }

    /// Look a field up by its input id
    pub fn from_id(id: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.id() == id)
    }

    /// `maxlength` attribute of the input, if any
    pub fn max_length(self) -> Option<usize> {
        match self {
            Field::Cvc => Some(3),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
