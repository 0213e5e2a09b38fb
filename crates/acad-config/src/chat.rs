//! Assistant chat configuration.

use serde::{Deserialize, Serialize};

fn default_model_id() -> String {
    "amazon.nova-lite-v1:0".to_string()
}

const fn default_temperature() -> f32 {
    0.7
}

/// Pause between showing a search recommendation and forwarding to results.
const fn default_redirect_delay_ms() -> u64 {
    3000
}

fn default_system_prompt() -> String {
    "academic_advisor".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatConfig {
    /// Model identifier forwarded to the LLM proxy.
    #[serde(default = "default_model_id")]
    pub model_id: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,

    /// Prompt preset: `academic_advisor`, `career_comparison`, `admission_advisor`.
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model_id: default_model_id(),
            temperature: default_temperature(),
            redirect_delay_ms: default_redirect_delay_ms(),
            system_prompt: default_system_prompt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_correct() {
        let config = ChatConfig::default();
        assert_eq!(config.model_id, "amazon.nova-lite-v1:0");
        assert!((config.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.redirect_delay_ms, 3000);
        assert_eq!(config.system_prompt, "academic_advisor");
    }
}
