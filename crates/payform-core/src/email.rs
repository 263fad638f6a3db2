//! Email syntax validation

/// Validates email syntax, accepting the same addresses as zod's `email()`.
///
/// Checks for:
/// - exactly one `@` with content on both sides
/// - no leading dot and no consecutive dots in the local part
/// - a local part ending in a letter, digit, `_`, `+` or `-`
/// - a dotted domain whose labels start with a letter or digit
/// - an alphabetic top-level domain of at least two characters
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if domain.contains('@') {
        return false;
    }

    // Local part
    if local.starts_with('.') || local.contains("..") {
        return false;
    }

    let valid_local_chars =
        |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '+' | '\'');

    if !local.chars().all(valid_local_chars) {
        return false;
    }

    // `.` and `'` may not close the local part
    match local.chars().last() {
        Some(c) if c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-') => {}
        _ => return false,
    }

    // Domain part
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    for label in &labels {
        if !label.starts_with(|c: char| c.is_ascii_alphanumeric()) {
            return false;
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return false;
        }
    }

    // TLD must be at least 2 letters
    match labels.last() {
        Some(tld) => tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()),
        None => false,
    }
}
