//! API error types and their end-user wording.

use thiserror::Error;

use crate::Endpoint;

/// Errors that can occur when talking to the Academia.net endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request exceeded its timeout.
    #[error("request timed out")]
    Timeout,

    /// The endpoint returned a non-success status code.
    #[error("API error ({status}): {}", message.as_deref().unwrap_or("<no message>"))]
    Api {
        /// HTTP status code.
        status: u16,
        /// `message` or `error` field of the JSON body, when present.
        message: Option<String>,
    },

    /// The endpoint returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// A chat prompt was empty or whitespace.
    #[error("empty prompt")]
    EmptyPrompt,
}

const CONNECTION_FAILED: &str = "Error al conectar con el servidor";
const CHAT_UNREACHABLE: &str =
    "No se pudo establecer comunicación con el asistente virtual. Verifica tu conexión a internet.";

impl ApiError {
    /// Localized message shown to the user after a failed call to `endpoint`.
    #[must_use]
    pub fn user_message(&self, endpoint: Endpoint) -> String {
        match endpoint {
            Endpoint::Chat => self.chat_message(),
            Endpoint::Register | Endpoint::VerifyEmail | Endpoint::ResendCode => match self {
                Self::Api { message, .. } => message
                    .clone()
                    .unwrap_or_else(|| endpoint.fallback_message().to_string()),
                Self::RateLimited { .. } | Self::Parse(_) => {
                    endpoint.fallback_message().to_string()
                }
                Self::Http(_) | Self::Timeout | Self::EmptyPrompt => CONNECTION_FAILED.to_string(),
            },
            Endpoint::Institutions | Endpoint::Programs | Endpoint::Application => {
                endpoint.fallback_message().to_string()
            }
        }
    }

    fn chat_message(&self) -> String {
        match self {
            Self::EmptyPrompt => "El mensaje no puede estar vacío".to_string(),
            Self::Timeout => "La respuesta está tomando más tiempo del esperado. Por favor, intenta con una pregunta más corta o específica.".to_string(),
            Self::RateLimited { .. } => "Has excedido el límite de solicitudes. Por favor, espera un momento antes de intentarlo de nuevo.".to_string(),
            Self::Api { status, .. } if *status >= 500 => {
                "El servicio de asistencia está experimentando problemas. Por favor, intenta más tarde.".to_string()
            }
            Self::Api { message, .. } => message
                .clone()
                .unwrap_or_else(|| Endpoint::Chat.fallback_message().to_string()),
            Self::Http(_) | Self::Parse(_) => CHAT_UNREACHABLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, message: Option<&str>) -> ApiError {
        ApiError::Api {
            status,
            message: message.map(String::from),
        }
    }

    #[test]
    fn auth_prefers_server_message() {
        let err = api(400, Some("El usuario ya existe"));
        assert_eq!(err.user_message(Endpoint::Register), "El usuario ya existe");
    }

    #[test]
    fn auth_falls_back_per_endpoint() {
        let err = api(400, None);
        assert_eq!(err.user_message(Endpoint::Register), "Error en el registro");
        assert_eq!(err.user_message(Endpoint::VerifyEmail), "Error en la verificación");
        assert_eq!(err.user_message(Endpoint::ResendCode), "Error al reenviar el código");
    }

    #[test]
    fn auth_without_response_reports_connection() {
        assert_eq!(
            ApiError::Timeout.user_message(Endpoint::VerifyEmail),
            "Error al conectar con el servidor"
        );
    }

    #[test]
    fn chat_maps_status_classes() {
        assert!(
            ApiError::RateLimited { retry_after_secs: 60 }
                .user_message(Endpoint::Chat)
                .starts_with("Has excedido el límite")
        );
        assert!(
            api(502, Some("bad gateway"))
                .user_message(Endpoint::Chat)
                .starts_with("El servicio de asistencia")
        );
        assert_eq!(
            api(400, Some("prompt demasiado largo")).user_message(Endpoint::Chat),
            "prompt demasiado largo"
        );
        assert_eq!(
            api(400, None).user_message(Endpoint::Chat),
            "Error en la comunicación con el servidor"
        );
        assert!(
            ApiError::Timeout
                .user_message(Endpoint::Chat)
                .starts_with("La respuesta está tomando")
        );
    }

    #[test]
    fn application_message_is_generic() {
        assert_eq!(
            api(400, Some("campo faltante")).user_message(Endpoint::Application),
            "Hubo un problema al enviar tu solicitud. Por favor intenta de nuevo más tarde."
        );
    }

    #[test]
    fn display_includes_status() {
        assert_eq!(api(404, None).to_string(), "API error (404): <no message>");
    }
}
