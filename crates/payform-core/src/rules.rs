// File: src/rules.rs
// Purpose: Declarative rule table mapping each field to a check and a message

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::copy::FormCopy;
use crate::email::is_valid_email;
use crate::field::Field;

static CARD_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{16}$").expect("card number pattern compiles"));

static EXPIRY_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/([0-9]{2})$").expect("expiry date pattern compiles")
});

/// The predicate half of a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// 16 ASCII digits once whitespace is removed
    CardNumber,
    /// `MM/YY` naming a month that starts after now
    FutureExpiry,
    /// Exactly this many characters, of any kind
    ExactLength(usize),
    /// Email syntax
    Email,
}

impl Check {
    pub fn passes(&self, value: &str, now: NaiveDateTime) -> bool {
        match self {
            Check::CardNumber => {
                let stripped: String = value.chars().filter(|c| !c.is_whitespace()).collect();
                CARD_NUMBER_REGEX.is_match(&stripped)
            }
            Check::FutureExpiry => parse_expiry(value)
                .and_then(|start| start.and_hms_opt(0, 0, 0))
                .is_some_and(|start| start > now),
            Check::ExactLength(len) => value.chars().count() == *len,
            Check::Email => is_valid_email(value),
        }
    }
}

/// Parses `MM/YY` into the first day of that month in 20YY
pub fn parse_expiry(value: &str) -> Option<NaiveDate> {
    let caps = EXPIRY_DATE_REGEX.captures(value)?;
    let month: u32 = caps.get(1)?.as_str().parse().ok()?;
    let year: i32 = caps.get(2)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(2000 + year, month, 1)
}

/// A check on one field paired with the message shown when it fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub field: Field,
    pub check: Check,
    pub message: String,
}

impl Rule {
    pub fn new(field: Field, check: Check, message: impl Into<String>) -> Self {
        Self {
            field,
            check,
            message: message.into(),
        }
    }

    /// Returns the message if `value` fails the check
    pub fn evaluate(&self, value: &str, now: NaiveDateTime) -> Option<&str> {
        if self.check.passes(value, now) {
            None
        } else {
            Some(&self.message)
        }
    }
}

/// The payment form rule table: one rule per field
pub fn payment_rules(copy: &FormCopy) -> Vec<Rule> {
    vec![
        Rule::new(Field::CardNumber, Check::CardNumber, copy.message(Field::CardNumber)),
        Rule::new(Field::ExpiryDate, Check::FutureExpiry, copy.message(Field::ExpiryDate)),
        Rule::new(Field::Cvc, Check::ExactLength(3), copy.message(Field::Cvc)),
        Rule::new(Field::Email, Check::Email, copy.message(Field::Email)),
    ]
}
