//! # acad-api
//!
//! HTTP client for the Academia.net REST endpoints:
//! - `GET /excel-institutions`: paged institution directory
//! - `GET /academic-programs`: paged program catalog
//! - `POST /submit-application`: applicant interest form
//! - `POST /register`, `/verify-email`, `/resend-verification-code`: admin sign-up
//! - `POST /ask-llm`: chat assistant proxy
//!
//! Every call is a single request/response with no retry.

pub mod applications;
pub mod auth;
pub mod chat;
pub mod institutions;
pub mod programs;

mod error;
mod http;

pub use chat::{ChatReply, ChatRequest, ModelOptions};
pub use error::ApiError;
pub use institutions::{InstitutionPage, InstitutionQuery};
pub use programs::{ProgramPage, ProgramQuery};

use std::time::Duration;

use acad_config::ApiConfig;

// ── Endpoints ──────────────────────────────────────────────────────

/// The remote operations this client performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Institutions,
    Programs,
    Application,
    Register,
    VerifyEmail,
    ResendCode,
    Chat,
}

impl Endpoint {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Institutions => "/excel-institutions",
            Self::Programs => "/academic-programs",
            Self::Application => "/submit-application",
            Self::Register => "/register",
            Self::VerifyEmail => "/verify-email",
            Self::ResendCode => "/resend-verification-code",
            Self::Chat => "/ask-llm",
        }
    }

    /// Message shown when the server gives nothing better.
    #[must_use]
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Self::Institutions => "No se pudo cargar la información de la institución",
            Self::Programs => "No se pudieron cargar los programas. Por favor, intenta más tarde.",
            Self::Application => {
                "Hubo un problema al enviar tu solicitud. Por favor intenta de nuevo más tarde."
            }
            Self::Register => "Error en el registro",
            Self::VerifyEmail => "Error en la verificación",
            Self::ResendCode => "Error al reenviar el código",
            Self::Chat => "Error en la comunicación con el servidor",
        }
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the Academia.net gateway.
#[derive(Debug, Clone)]
pub struct AcademiaClient {
    http: reqwest::Client,
    base_url: String,
    chat_timeout: Duration,
}

impl AcademiaClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base().to_string(),
            chat_timeout: Duration::from_secs(config.chat_timeout_secs),
        })
    }

    /// Base URL every endpoint path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_trims_base_url() {
        let config = ApiConfig {
            base_url: "http://localhost:8000/dev/".into(),
            ..Default::default()
        };
        let client = AcademiaClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/dev");
        assert_eq!(
            client.url(Endpoint::Chat.path()),
            "http://localhost:8000/dev/ask-llm"
        );
    }

    #[test]
    fn chat_timeout_comes_from_config() {
        let config = ApiConfig {
            chat_timeout_secs: 90,
            ..Default::default()
        };
        let client = AcademiaClient::new(&config).unwrap();
        assert_eq!(client.chat_timeout, Duration::from_secs(90));
    }
}
