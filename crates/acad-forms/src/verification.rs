//! Six-box verification code entry.

use std::time::Duration;

use acad_core::entities::VerificationRequest;
use acad_core::routes::Route;

use crate::FormError;

pub const CODE_LENGTH: usize = 6;

/// Shown after a successful resend.
pub const RESEND_SUCCESS: &str = "Se ha enviado un nuevo código a tu correo electrónico.";

/// Pause between a successful verification and the dashboard redirect.
pub const VERIFIED_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Six independent single-digit boxes plus the focused box index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeEntry {
    digits: [Option<char>; CODE_LENGTH],
    focus: usize,
}

impl CodeEntry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Type into box `index`.
    ///
    /// Empty input clears the box. Anything that is not all digits is
    /// ignored. Otherwise the first digit is stored and focus advances,
    /// except on the last box.
    pub fn input(&mut self, index: usize, value: &str) {
        if index >= CODE_LENGTH {
            return;
        }
        if value.is_empty() {
            self.digits[index] = None;
            return;
        }
        if !all_digits(value) {
            return;
        }
        self.digits[index] = value.chars().next();
        if index < CODE_LENGTH - 1 {
            self.focus = index + 1;
        }
    }

    /// Backspace in box `index`: clears a filled box, or moves focus back
    /// from an empty one.
    pub fn backspace(&mut self, index: usize) {
        if index >= CODE_LENGTH {
            return;
        }
        if self.digits[index].is_some() {
            self.digits[index] = None;
        } else if index > 0 {
            self.focus = index - 1;
        }
    }

    /// Paste `text` starting at the first box.
    ///
    /// Non-digit pastes are ignored. Focus lands on the first empty box, or
    /// the last box when all are full.
    pub fn paste(&mut self, text: &str) {
        let text = text.trim();
        if !all_digits(text) {
            return;
        }
        for (slot, digit) in self.digits.iter_mut().zip(text.chars()) {
            *slot = Some(digit);
        }
        self.focus = self
            .digits
            .iter()
            .position(Option::is_none)
            .unwrap_or(CODE_LENGTH - 1);
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.digits.iter().all(Option::is_some)
    }

    /// Entered digits joined in order; empty boxes are skipped.
    #[must_use]
    pub fn code(&self) -> String {
        self.digits.iter().flatten().collect()
    }

    #[must_use]
    pub const fn focus(&self) -> usize {
        self.focus
    }

    #[must_use]
    pub fn digit(&self, index: usize) -> Option<char> {
        self.digits.get(index).copied().flatten()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// The verification view: username from the route plus the code boxes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationForm {
    pub username: Option<String>,
    pub code: CodeEntry,
}

impl VerificationForm {
    #[must_use]
    pub fn for_route(route: &Route) -> Self {
        let username = match route {
            Route::AdminVerification { username } => username.clone(),
            _ => None,
        };
        Self {
            username,
            code: CodeEntry::new(),
        }
    }

    /// Username to resend a code for.
    ///
    /// # Errors
    ///
    /// [`FormError::UnknownUser`] when the route carried no username.
    pub fn username(&self) -> Result<&str, FormError> {
        self.username
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or(FormError::UnknownUser)
    }

    /// Build the `/verify-email` body.
    ///
    /// # Errors
    ///
    /// [`FormError::UnknownUser`] without a username, or
    /// [`FormError::IncompleteCode`] until all six boxes are filled.
    pub fn request(&self) -> Result<VerificationRequest, FormError> {
        let username = self.username()?;
        if !self.code.is_complete() {
            return Err(FormError::IncompleteCode(CODE_LENGTH));
        }
        Ok(VerificationRequest {
            username: username.to_string(),
            code: self.code.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn typing_advances_focus() {
        let mut entry = CodeEntry::new();
        entry.input(0, "4");
        assert_eq!(entry.focus(), 1);
        entry.input(1, "27");
        assert_eq!(entry.digit(1), Some('2'));
        assert_eq!(entry.focus(), 2);
    }

    #[test]
    fn last_box_keeps_focus() {
        let mut entry = CodeEntry::new();
        entry.input(5, "9");
        assert_eq!(entry.focus(), 0);
        assert_eq!(entry.digit(5), Some('9'));
    }

    #[test]
    fn non_digit_input_is_ignored() {
        let mut entry = CodeEntry::new();
        entry.input(0, "a");
        entry.input(0, "1a");
        assert_eq!(entry.digit(0), None);
        assert_eq!(entry.focus(), 0);
    }

    #[test]
    fn backspace_on_empty_moves_back() {
        let mut entry = CodeEntry::new();
        entry.input(0, "1");
        entry.input(1, "2");
        entry.backspace(2);
        assert_eq!(entry.focus(), 1);
        assert_eq!(entry.code(), "12");
    }

    #[test]
    fn backspace_on_filled_clears() {
        let mut entry = CodeEntry::new();
        entry.input(0, "1");
        entry.input(1, "2");
        entry.backspace(1);
        assert_eq!(entry.digit(1), None);
        assert_eq!(entry.focus(), 2);
    }

    #[test]
    fn backspace_on_first_box_stays() {
        let mut entry = CodeEntry::new();
        entry.backspace(0);
        assert_eq!(entry.focus(), 0);
    }

    #[test]
    fn pasting_six_digits_fills_all_and_focuses_last() {
        let mut entry = CodeEntry::new();
        entry.paste("482913");
        assert!(entry.is_complete());
        assert_eq!(entry.code(), "482913");
        assert_eq!(entry.focus(), 5);
    }

    #[test]
    fn pasting_long_code_truncates() {
        let mut entry = CodeEntry::new();
        entry.paste("12345678");
        assert_eq!(entry.code(), "123456");
    }

    #[test]
    fn partial_paste_focuses_first_empty() {
        let mut entry = CodeEntry::new();
        entry.paste("123");
        assert_eq!(entry.focus(), 3);
        assert!(!entry.is_complete());
    }

    #[test]
    fn non_digit_paste_is_ignored() {
        let mut entry = CodeEntry::new();
        entry.paste("12-456");
        assert_eq!(entry.code(), "");
    }

    #[test]
    fn request_needs_username_and_full_code() {
        let mut form = VerificationForm::for_route(&Route::parse("/admin/verificar"));
        assert_eq!(form.request(), Err(FormError::UnknownUser));

        form.username = Some("laura.rios".into());
        form.code.paste("123");
        assert_eq!(form.request(), Err(FormError::IncompleteCode(6)));

        form.code.paste("123456");
        let request = form.request().unwrap();
        assert_eq!(request.username, "laura.rios");
        assert_eq!(request.code, "123456");
    }

    #[test]
    fn username_comes_from_route() {
        let form = VerificationForm::for_route(&Route::parse("/admin/verificar?username=laura.rios"));
        assert_eq!(form.username(), Ok("laura.rios"));
    }
}
