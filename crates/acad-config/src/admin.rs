//! Admin dashboard login configuration.

use serde::{Deserialize, Serialize};

/// Credentials accepted by the dashboard login. There is no login endpoint;
/// the check is local.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}

impl AdminConfig {
    /// Check if both credentials are set.
    pub fn is_configured(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}
