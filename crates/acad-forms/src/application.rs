//! Interest form opened from a program card.

use acad_core::entities::{ApplicationSubmission, ProgramListing};

use crate::FieldErrors;
use crate::rules::{require, require_email};

/// Confirmation shown once the backend accepts a submission.
pub const APPLICATION_RECEIVED: &str =
    "¡Tu solicitud de afiliación ha sido recibida! Pronto recibirás un correo con más información.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl ApplicationForm {
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "firstName", &self.first_name, "Nombre es requerido");
        require(&mut errors, "lastName", &self.last_name, "Apellido es requerido");
        require_email(
            &mut errors,
            "email",
            &self.email,
            "Email es requerido",
            "Email inválido",
        );
        require(
            &mut errors,
            "phoneNumber",
            &self.phone,
            "Número de teléfono es requerido",
        );
        errors
    }

    /// Build the request body for `program`.
    ///
    /// # Errors
    ///
    /// Returns the [`FieldErrors`] if any field is missing or malformed.
    pub fn submit(&self, program: &ProgramListing) -> Result<ApplicationSubmission, FieldErrors> {
        self.validate().into_result(|| ApplicationSubmission {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            program_name: ApplicationSubmission::compose_program_name(
                &program.title,
                &program.university,
            ),
            program_id: program.id.clone(),
        })
    }

    /// Reset every field, as when the modal closes.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
