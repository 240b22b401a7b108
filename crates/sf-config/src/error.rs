//! Errors raised while loading checklist configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or environment value could not be merged or extracted.
    #[error("failed to load configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A value parsed but is unusable, e.g. an unknown strftime specifier.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
