use std::fmt;

/// Per-field validation messages, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record `message` for `field`. Only the first message per field is kept.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.errors.push((field, message.into()));
        }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// `Ok(value)` when nothing was recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` if any field failed.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_message_per_field() {
        let mut errors = FieldErrors::new();
        errors.push("email", "Email es requerido");
        errors.push("email", "Email inválido");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Email es requerido"));
    }

    #[test]
    fn display_joins_fields() {
        let mut errors = FieldErrors::new();
        errors.push("firstName", "Nombre es requerido");
        errors.push("phone", "Número de teléfono es requerido");
        assert_eq!(
            errors.to_string(),
            "firstName: Nombre es requerido; phone: Número de teléfono es requerido"
        );
    }

    #[test]
    fn into_result_only_builds_when_clean() {
        assert_eq!(FieldErrors::new().into_result(|| 7), Ok(7));
        let mut errors = FieldErrors::new();
        errors.push("x", "y");
        assert!(errors.into_result(|| 7).is_err());
    }
}
