//! Payform Core
//!
//! Formatting, validation and markup for a four-field payment form
//! (card number, expiry date, CVC, email).
//! Used by both the browser bindings and the development server.
//!
//! Validation is a pure function of a [`Snapshot`]; nothing here touches the DOM.

pub mod clock;
pub mod copy;
pub mod email;
pub mod field;
pub mod format;
pub mod render;
pub mod rules;
pub mod snapshot;
pub mod validator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use copy::FormCopy;
pub use email::is_valid_email;
pub use field::{Field, APP_CONTAINER_ID, COPY_ATTR, ERROR_CLASS, FORM_ID, PAY_BUTTON_ID};
pub use format::{format_card_number, format_expiry_date, format_input};
pub use render::{render_field, render_form, render_page, PageOptions};
pub use rules::{payment_rules, Check, Rule};
pub use snapshot::Snapshot;
pub use validator::{validate, FormState, ValidationResult, Validator};
