//! Network identity lookup configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Public-IP providers, tried in order. Each must answer with JSON carrying
/// an `ip` field.
fn default_providers() -> Vec<String> {
    vec![
        "https://api.ipify.org?format=json".to_string(),
        "https://api4.ipify.org?format=json".to_string(),
        "https://ipv4.seeip.org/json".to_string(),
    ]
}

const fn default_attempt_timeout_secs() -> u64 {
    5
}

fn default_user_agent() -> String {
    "sfcheck/0.1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdentityConfig {
    /// Provider URLs in fallback order.
    #[serde(default = "default_providers")]
    pub providers: Vec<String>,

    /// Upper bound for a single provider attempt.
    #[serde(default = "default_attempt_timeout_secs")]
    pub attempt_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            providers: default_providers(),
            attempt_timeout_secs: default_attempt_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl IdentityConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.providers.is_empty() {
            return Err(ConfigError::invalid(
                "identity.providers",
                "at least one provider is required",
            ));
        }
        if let Some(bad) = self
            .providers
            .iter()
            .find(|url| !(url.starts_with("http://") || url.starts_with("https://")))
        {
            return Err(ConfigError::invalid(
                "identity.providers",
                format!("'{bad}' is not an http(s) URL"),
            ));
        }
        if self.attempt_timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "identity.attempt_timeout_secs",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}
