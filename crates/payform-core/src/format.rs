//! Live formatting applied to input values before validation

use crate::field::Field;

const CARD_GROUP: usize = 4;
const EXPIRY_DIGITS: usize = 4;

fn digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Strips non-digits and groups the rest into blocks of four.
///
/// ```
/// use payform_core::format_card_number;
/// assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
/// assert_eq!(format_card_number("41-11 1"), "4111 1");
/// ```
pub fn format_card_number(raw: &str) -> String {
    let digits = digits(raw);
    let mut out = String::with_capacity(digits.len() + digits.len() / CARD_GROUP);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % CARD_GROUP == 0 {
            out.push(' ');
        }
        out.push(c);
    }

    out
}

/// Strips non-digits and inserts `/` after the month once two digits exist.
///
/// At most four digits are kept. Exactly two digits yield `"MM/"`.
pub fn format_expiry_date(raw: &str) -> String {
    let digits = digits(raw);
    if digits.len() < 2 {
        return digits;
    }

    let year_end = digits.len().min(EXPIRY_DIGITS);
    format!("{}/{}", &digits[..2], &digits[2..year_end])
}

/// Formats `raw` the way the input for `field` displays it
pub fn format_input(field: Field, raw: &str) -> String {
    match field {
        Field::CardNumber => format_card_number(raw),
        Field::ExpiryDate => format_expiry_date(raw),
        Field::Cvc | Field::Email => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("4", "4")]
    #[case("4111", "4111")]
    #[case("41111", "4111 1")]
    #[case("4111111111111111", "4111 1111 1111 1111")]
    #[case("4111 1111 1111 1111", "4111 1111 1111 1111")]
    #[case("4111-1111 abc 1111", "4111 1111 1111")]
    #[case("41111111111111112222", "4111 1111 1111 1111 2222")]
    #[case("no digits", "")]
    fn test_format_card_number(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(format_card_number(raw), expected);
    }

    #[test]
    fn test_card_number_shape_holds_for_arbitrary_input() {
        let inputs = [
            "",
            " ",
            "    ",
            "1 2 3 4 5",
            "١٢٣٤٥",
            "12345678901234567890123",
            "abcd1234efgh5678 ",
            "\t9\n8\r7 6-5_4",
            "0000 0000 0000 0000 ",
        ];

        for raw in inputs {
            let formatted = format_card_number(raw);
            assert!(!formatted.ends_with(' '), "trailing space for {raw:?}");
            assert!(!formatted.starts_with(' '), "leading space for {raw:?}");
            assert!(!formatted.contains("  "), "double space for {raw:?}");

            for (i, c) in formatted.chars().enumerate() {
                if (i + 1) % 5 == 0 {
                    assert_eq!(c, ' ', "expected separator at {i} in {formatted:?}");
                } else {
                    assert!(c.is_ascii_digit(), "unexpected {c:?} in {formatted:?}");
                }
            }
        }
    }

    #[rstest]
    #[case("", "")]
    #[case("1", "1")]
    #[case("12", "12/")]
    #[case("123", "12/3")]
    #[case("1225", "12/25")]
    #[case("122599", "12/25")]
    #[case("12/25", "12/25")]
    #[case("1a2b", "12/")]
    #[case("/", "")]
    fn test_format_expiry_date(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(format_expiry_date(raw), expected);
    }

    #[test]
    fn test_format_input_only_touches_formatted_fields() {
        assert_eq!(format_input(Field::CardNumber, "41111"), "4111 1");
        assert_eq!(format_input(Field::ExpiryDate, "0130"), "01/30");
        assert_eq!(format_input(Field::Cvc, "1a 3"), "1a 3");
        assert_eq!(format_input(Field::Email, " a@b.com"), " a@b.com");
    }
}
