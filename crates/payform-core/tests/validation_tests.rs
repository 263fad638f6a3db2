//! End-to-end checks of the payment form behaviour: raw keystrokes are
//! formatted the way the inputs display them, then the whole snapshot is
//! validated against the real system clock.

use chrono::{Datelike, Local, Months};
use payform_core::*;

/// `MM/YY` for the month `months` after the current one
fn expiry_in(months: u32) -> String {
    let date = Local::now().date_naive() + Months::new(months);
    format!("{:02}/{:02}", date.month(), date.year() % 100)
}

fn typed(card: &str, expiry: &str, cvc: &str, email: &str) -> Snapshot {
    Snapshot::new(
        format_input(Field::CardNumber, card),
        format_input(Field::ExpiryDate, expiry),
        format_input(Field::Cvc, cvc),
        format_input(Field::Email, email),
    )
}

#[test]
fn test_card_number_formats_and_validates() {
    let formatted = format_card_number("4111111111111111");
    assert_eq!(formatted, "4111 1111 1111 1111");

    let snapshot = Snapshot::new(formatted, expiry_in(2), "123", "a@b.com");
    let result = validate(&snapshot);
    assert!(result.is_field_valid(Field::CardNumber));
    assert!(result.valid);
}

#[test]
fn test_expiry_dates() {
    let base = Snapshot::new("4111111111111111", "", "123", "a@b.com");

    for (expiry, ok) in [
        ("13/99".to_string(), false),
        ("01/20".to_string(), false),
        (expiry_in(0), false),
        (expiry_in(1), true),
        (expiry_in(12), true),
    ] {
        let mut snapshot = base.clone();
        snapshot.expiry_date = expiry.clone();
        let result = validate(&snapshot);
        assert_eq!(result.is_field_valid(Field::ExpiryDate), ok, "expiry {expiry}");
        if !ok {
            assert_eq!(result.message(Field::ExpiryDate), "invalid date");
        }
    }
}

#[test]
fn test_cvc_length() {
    let short = validate(&Snapshot::new("", "", "12", ""));
    assert_eq!(short.message(Field::Cvc), "enter 3 digits");

    let exact = validate(&Snapshot::new("", "", "123", ""));
    assert_eq!(exact.message(Field::Cvc), "");
}

#[test]
fn test_email_syntax() {
    let bad = validate(&Snapshot::new("", "", "", "a@b"));
    assert_eq!(bad.message(Field::Email), "invalid email");

    let good = validate(&Snapshot::new("", "", "", "a@b.com"));
    assert_eq!(good.message(Field::Email), "");
}

#[test]
fn test_submit_enabled_only_when_all_fields_pass() {
    let expiry = expiry_in(3);
    let typed_expiry = expiry.replace('/', "");

    let complete = typed("4111 1111 1111 1111", &typed_expiry, "123", "a@b.com");
    assert_eq!(complete.expiry_date, expiry);
    assert!(!validate(&complete).submit_disabled());

    let breakages: [(Field, &str); 4] = [
        (Field::CardNumber, "4111 1111"),
        (Field::ExpiryDate, "13/99"),
        (Field::Cvc, "12"),
        (Field::Email, "a@b"),
    ];

    for (field, value) in breakages {
        let mut snapshot = complete.clone();
        snapshot.set(field, value);
        let result = validate(&snapshot);
        assert!(result.submit_disabled(), "{field} = {value:?} should disable submit");
        assert_eq!(result.invalid_fields(), vec![field]);
    }
}

#[test]
fn test_typing_sequence_tracks_state() {
    let validator = Validator::default();
    let mut snapshot = Snapshot::default();
    let mut state = FormState::default();

    let keystrokes: [(Field, &str); 4] = [
        (Field::CardNumber, "4111111111111111"),
        (Field::Cvc, "123"),
        (Field::Email, "a@b.com"),
        (Field::ExpiryDate, "1299"),
    ];

    for (i, (field, raw)) in keystrokes.into_iter().enumerate() {
        snapshot.set(field, format_input(field, raw));
        let result = validator.validate(&snapshot);
        state = state.transition(&result);

        let last = i == 3;
        assert_eq!(state == FormState::Valid, last, "after typing into {field}");
    }

    // Re-running on a valid snapshot changes nothing
    let first = validator.validate(&snapshot);
    let second = validator.validate(&snapshot);
    assert_eq!(first, second);
    assert!(first.errors.values().all(String::is_empty));
}
