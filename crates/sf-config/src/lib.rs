//! # sf-config
//!
//! Layered configuration loading for the checklist using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SFCHECK_*` prefix, `__` as separator)
//! 2. Project-level `.sfcheck/config.toml`
//! 3. User-level `~/.config/sfcheck/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SFCHECK_REPORT__TITLE` -> `report.title`,
//! `SFCHECK_IDENTITY__ATTEMPT_TIMEOUT_SECS` -> `identity.attempt_timeout_secs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sf_config::SfConfig;
//!
//! let config = SfConfig::load_with_dotenv().expect("config");
//! println!("reports go to {}", config.report.output_dir.display());
//! ```

mod catalog;
mod error;
mod identity;
mod report;

pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use identity::IdentityConfig;
pub use report::{ReportConfig, ReportFormat};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SfConfig {
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl SfConfig {
    /// Load and validate configuration from TOML files and environment
    /// variables.
    ///
    /// Does NOT call `dotenvy`; use [`SfConfig::load_with_dotenv`] for
    /// `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] if a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading a `.env` file from the current
    /// directory, if one exists.
    ///
    /// # Errors
    ///
    /// Same as [`SfConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`SfConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".sfcheck/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SFCHECK_").split("__"))
    }

    /// Check cross-field constraints serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.identity.validate()?;
        self.report.validate()?;
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sfcheck").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SfConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.catalog.uses_builtin());
        assert_eq!(config.report.format, ReportFormat::Text);
    }

    #[test]
    fn defaults_extract_from_serialized_provider() {
        let figment = Figment::from(Serialized::defaults(SfConfig::default()));
        let config = SfConfig::from_figment(&figment).expect("should extract defaults");
        assert_eq!(config.identity.attempt_timeout_secs, 5);
        assert_eq!(config.report.file_prefix, "EMV_Testing_Checklist");
    }
}
