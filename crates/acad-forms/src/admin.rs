//! Institution staff forms: sign-up and dashboard login.

use acad_config::AdminConfig;
use acad_core::entities::AdminRegistration;
use acad_core::routes::Route;

use crate::rules::{has_mixed_case_and_digit, require, require_email, require_match};
use crate::{FieldErrors, FormError};

const EMAIL_REQUIRED: &str = "El correo electrónico es requerido";
const EMAIL_INVALID: &str = "Ingresa un correo electrónico válido";
const PASSWORD_REQUIRED: &str = "La contraseña es requerida";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminRegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub institution_legal_name: String,
    pub institution_abbreviation: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl AdminRegistrationForm {
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "nombre", &self.first_name, "El nombre es requerido");
        require(&mut errors, "apellido", &self.last_name, "El apellido es requerido");
        require(
            &mut errors,
            "nombreLegalInstitucion",
            &self.institution_legal_name,
            "El nombre legal de la institución es requerido",
        );
        require(
            &mut errors,
            "abreviacionNombre",
            &self.institution_abbreviation,
            "La abreviación del nombre es requerida",
        );
        require_email(
            &mut errors,
            "correoElectronico",
            &self.email,
            EMAIL_REQUIRED,
            EMAIL_INVALID,
        );

        if require(&mut errors, "contrasena", &self.password, PASSWORD_REQUIRED) {
            if self.password.chars().count() < 8 {
                errors.push(
                    "contrasena",
                    "La contraseña debe tener al menos 8 caracteres",
                );
            } else if !has_mixed_case_and_digit(&self.password) {
                errors.push(
                    "contrasena",
                    "La contraseña debe contener al menos una letra mayúscula, una minúscula y un número",
                );
            }
        }

        require_match(
            &mut errors,
            "confirmarContrasena",
            &self.password,
            &self.password_confirmation,
            "Confirma tu contraseña",
            "Las contraseñas deben coincidir",
        );
        errors
    }

    /// Build the `/register` request body.
    ///
    /// # Errors
    ///
    /// Returns the [`FieldErrors`] if any rule fails.
    pub fn submit(&self) -> Result<AdminRegistration, FieldErrors> {
        self.validate().into_result(|| AdminRegistration {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            institution_legal_name: self.institution_legal_name.trim().to_string(),
            institution_abbreviation: self.institution_abbreviation.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminLoginForm {
    pub email: String,
    pub password: String,
}

impl AdminLoginForm {
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_email(&mut errors, "email", &self.email, EMAIL_REQUIRED, EMAIL_INVALID);
        if require(&mut errors, "password", &self.password, PASSWORD_REQUIRED)
            && self.password.chars().count() < 6
        {
            errors.push("password", "La contraseña debe tener al menos 6 caracteres");
        }
        errors
    }

    /// Check the credentials against the configured dashboard account and
    /// return the dashboard route on success.
    ///
    /// # Errors
    ///
    /// [`FormError::Fields`] on validation failure, otherwise
    /// [`FormError::InvalidCredentials`] when the credentials do not match or
    /// no dashboard account is configured.
    pub fn submit(&self, admin: &AdminConfig) -> Result<Route, FormError> {
        self.validate().into_result(|| ())?;
        if admin.is_configured()
            && self.email.trim() == admin.email
            && self.password == admin.password
        {
            Ok(Route::AdminDashboard)
        } else {
            Err(FormError::InvalidCredentials)
        }
    }
}
