use thiserror::Error;

use crate::FieldErrors;

/// Failures of forms that do more than field validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0}")]
    Fields(#[from] FieldErrors),

    #[error("Credenciales inválidas. Por favor verifica tu correo y contraseña.")]
    InvalidCredentials,

    #[error("No se pudo identificar al usuario. Por favor vuelve al formulario de registro.")]
    UnknownUser,

    #[error("Ingresa los {0} dígitos del código de verificación.")]
    IncompleteCode(usize),
}
