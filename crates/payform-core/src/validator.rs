// File: src/validator.rs
// Purpose: Whole-form validation over a snapshot, and the valid/invalid state

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::copy::FormCopy;
use crate::field::Field;
use crate::rules::{payment_rules, Rule};
use crate::snapshot::Snapshot;

/// Outcome of validating a snapshot.
///
/// `errors` always holds an entry for each field: the failure message, or an
/// empty string when the field passed. Pass/fail is tracked apart from the
/// text, since a configured message may itself be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: BTreeMap<Field, String>,
    #[serde(skip)]
    failed: BTreeSet<Field>,
}

impl ValidationResult {
    fn new(errors: BTreeMap<Field, String>, failed: BTreeSet<Field>) -> Self {
        Self {
            valid: failed.is_empty(),
            errors,
            failed,
        }
    }

    /// Message for a field, empty when it passed
    pub fn message(&self, field: Field) -> &str {
        self.errors.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn is_field_valid(&self, field: Field) -> bool {
        !self.failed.contains(&field)
    }

    /// Fields that failed, in render order
    pub fn invalid_fields(&self) -> Vec<Field> {
        self.failed.iter().copied().collect()
    }

    /// Whether the submit control should be disabled
    pub fn submit_disabled(&self) -> bool {
        !self.valid
    }
}

/// Form-level state: submission is only possible while `Valid`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum FormState {
    #[default]
    Invalid,
    Valid,
}

impl FormState {
    pub fn from_result(result: &ValidationResult) -> Self {
        if result.valid {
            FormState::Valid
        } else {
            FormState::Invalid
        }
    }

    /// Next state after a full re-validation
    pub fn transition(self, result: &ValidationResult) -> Self {
        let next = Self::from_result(result);
        if next != self {
            debug!(from = ?self, to = ?next, "form state changed");
        }
        next
    }
}

/// Evaluates the rule table against snapshots.
///
/// Every rule runs on every call; a failing field never hides another's message.
#[derive(Debug, Clone)]
pub struct Validator<C = SystemClock> {
    rules: Vec<Rule>,
    clock: C,
}

impl Validator<SystemClock> {
    pub fn new(copy: &FormCopy) -> Self {
        Self::with_clock(copy, SystemClock)
    }
}

impl Default for Validator<SystemClock> {
    fn default() -> Self {
        Self::new(&FormCopy::default())
    }
}

impl<C: Clock> Validator<C> {
    pub fn with_clock(copy: &FormCopy, clock: C) -> Self {
        Self {
            rules: payment_rules(copy),
            clock,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn validate(&self, snapshot: &Snapshot) -> ValidationResult {
        let now = self.clock.now();
        let mut errors: BTreeMap<Field, String> =
            Field::ALL.into_iter().map(|f| (f, String::new())).collect();
        let mut failed = BTreeSet::new();

        for rule in &self.rules {
            if let Some(message) = rule.evaluate(snapshot.get(rule.field), now) {
                trace!(field = %rule.field, message, "rule failed");
                // First failing rule for a field supplies its message
                if failed.insert(rule.field) {
                    errors.insert(rule.field, message.to_string());
                }
            }
        }

        let result = ValidationResult::new(errors, failed);
        debug!(valid = result.valid, invalid = ?result.invalid_fields(), "validated snapshot");
        result
    }
}

/// Validates `snapshot` with the default messages against the system clock
pub fn validate(snapshot: &Snapshot) -> ValidationResult {
    Validator::default().validate(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn validator() -> Validator<FixedClock> {
        let now = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        Validator::with_clock(&FormCopy::default(), FixedClock(now))
    }

    fn valid_snapshot() -> Snapshot {
        Snapshot::new("4111 1111 1111 1111", "11/26", "123", "a@b.com")
    }

    #[test]
    fn test_valid_snapshot() {
        let result = validator().validate(&valid_snapshot());
        assert!(result.valid);
        assert!(!result.submit_disabled());
        for field in Field::ALL {
            assert_eq!(result.message(field), "");
        }
    }

    #[test]
    fn test_empty_snapshot_reports_every_field() {
        let result = validator().validate(&Snapshot::default());
        assert!(!result.valid);
        assert_eq!(result.invalid_fields(), Field::ALL.to_vec());
        assert_eq!(result.message(Field::CardNumber), "invalid card number");
        assert_eq!(result.message(Field::ExpiryDate), "invalid date");
        assert_eq!(result.message(Field::Cvc), "enter 3 digits");
        assert_eq!(result.message(Field::Email), "invalid email");
    }

    #[test]
    fn test_single_failure_does_not_mask_others() {
        let mut snapshot = valid_snapshot();
        snapshot.cvc = "12".to_string();
        let result = validator().validate(&snapshot);
        assert!(!result.valid);
        assert_eq!(result.invalid_fields(), vec![Field::Cvc]);
        assert_eq!(result.message(Field::Cvc), "enter 3 digits");
        assert_eq!(result.message(Field::Email), "");
    }

    #[test]
    fn test_revalidation_is_idempotent() {
        let v = validator();
        let snapshot = valid_snapshot();
        assert_eq!(v.validate(&snapshot), v.validate(&snapshot));
    }

    #[test]
    fn test_custom_messages_flow_into_results() {
        let copy = FormCopy {
            email_message: "Некорректный email".to_string(),
            ..FormCopy::default()
        };
        let v = Validator::with_clock(&copy, validator().clock);
        let mut snapshot = valid_snapshot();
        snapshot.email = "a@b".to_string();
        assert_eq!(v.validate(&snapshot).message(Field::Email), "Некорректный email");
    }

    #[test]
    fn test_empty_message_still_fails_field() {
        let copy = FormCopy {
            cvc_message: String::new(),
            ..FormCopy::default()
        };
        let v = Validator::with_clock(&copy, validator().clock);
        let mut snapshot = valid_snapshot();
        snapshot.cvc = "12".to_string();

        let result = v.validate(&snapshot);
        assert!(!result.valid);
        assert!(result.submit_disabled());
        assert!(!result.is_field_valid(Field::Cvc));
        assert_eq!(result.message(Field::Cvc), "");
        assert_eq!(result.invalid_fields(), vec![Field::Cvc]);
        assert_eq!(FormState::from_result(&result), FormState::Invalid);
    }

    #[test]
    fn test_state_transitions() {
        let v = validator();
        let mut state = FormState::default();
        assert_eq!(state, FormState::Invalid);

        state = state.transition(&v.validate(&valid_snapshot()));
        assert_eq!(state, FormState::Valid);

        state = state.transition(&v.validate(&Snapshot::default()));
        assert_eq!(state, FormState::Invalid);
    }

    #[test]
    fn test_result_serializes_with_element_ids() {
        let result = validator().validate(&valid_snapshot());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["valid"], true);
        assert_eq!(json["errors"]["cardNumber"], "");
        assert_eq!(json["errors"]["expiryDate"], "");
    }
}
