//! # acad-config
//!
//! Layered configuration loading for Academia.net using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ACADEMIA_*` prefix, `__` as separator)
//! 2. Project-level `.academia/config.toml`
//! 3. User-level `~/.config/academia/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ACADEMIA_API__BASE_URL` -> `api.base_url`,
//! `ACADEMIA_CHAT__REDIRECT_DELAY_MS` -> `chat.redirect_delay_ms`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use acad_config::AcademiaConfig;
//!
//! let config = AcademiaConfig::load_with_dotenv().expect("config");
//! println!("API: {}", config.api.base());
//! ```

mod admin;
mod api;
mod chat;
mod error;
mod general;

pub use admin::AdminConfig;
pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use chat::ChatConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config location, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".academia/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AcademiaConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl AcademiaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ACADEMIA_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("academia").join("config.toml"))
    }
}
