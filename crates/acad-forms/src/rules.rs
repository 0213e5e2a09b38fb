//! Field rules shared by the forms.

use std::sync::OnceLock;

use regex::Regex;

use crate::FieldErrors;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$")
            .expect("email pattern is a valid regex")
    })
}

/// `local@domain.tld`, case-insensitive, TLD of two or more letters.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Record `message` when `value` is blank. Returns whether the value was present.
pub fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) -> bool {
    let present = !value.trim().is_empty();
    if !present {
        errors.push(field, message);
    }
    present
}

/// Required email: blank → `required`, malformed → `invalid`.
pub fn require_email(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    required: &str,
    invalid: &str,
) {
    if require(errors, field, value, required) && !is_valid_email(value.trim()) {
        errors.push(field, invalid);
    }
}

/// Required confirmation that must equal `original`.
pub fn require_match(
    errors: &mut FieldErrors,
    field: &'static str,
    original: &str,
    confirmation: &str,
    required: &str,
    mismatch: &str,
) {
    if require(errors, field, confirmation, required) && confirmation != original {
        errors.push(field, mismatch);
    }
}

/// Required value that must be one of `options` (matched on the key).
pub fn require_choice(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    options: &[(&str, &str)],
    required: &str,
) {
    if require(errors, field, value, required) && !options.iter().any(|(key, _)| *key == value) {
        errors.push(field, "Selecciona una opción válida");
    }
}

/// At least one lowercase letter, one uppercase letter and one digit.
#[must_use]
pub fn has_mixed_case_and_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ana@example.com", true)]
    #[case("ANA.GOMEZ+ITM@Correo.Edu.CO", true)]
    #[case("ana@localhost", false)]
    #[case("ana example.com", false)]
    #[case("@example.com", false)]
    #[case("ana@example.c", false)]
    fn email_pattern(#[case] value: &str, #[case] valid: bool) {
        assert_eq!(is_valid_email(value), valid);
    }

    #[rstest]
    #[case("Secreto123", true)]
    #[case("secreto123", false)]
    #[case("SECRETO123", false)]
    #[case("SecretoSinNumero", false)]
    fn password_strength(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(has_mixed_case_and_digit(value), ok);
    }

    #[test]
    fn blank_counts_as_missing() {
        let mut errors = FieldErrors::new();
        assert!(!require(&mut errors, "name", "   ", "requerido"));
        assert_eq!(errors.get("name"), Some("requerido"));
    }
}
