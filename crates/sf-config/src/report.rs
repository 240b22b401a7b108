//! Report rendering and export configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use sf_core::{
    CoreError, DEFAULT_DATE_FORMAT, DEFAULT_FILE_PREFIX, DEFAULT_TIME_FORMAT, DEFAULT_TITLE,
    TimestampFormat,
};

use crate::error::ConfigError;

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_file_prefix() -> String {
    DEFAULT_FILE_PREFIX.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}

/// Encoding of the exported artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Plain text, one line per placement.
    #[default]
    Text,
    /// Placement list as JSON, for an external document backend.
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Caption printed above the first category.
    #[serde(default = "default_title")]
    pub title: String,

    /// Artifact file name prefix.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Directory exported artifacts are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// strftime pattern for the date in header and file name.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// strftime pattern for the time in header and file name.
    #[serde(default = "default_time_format")]
    pub time_format: String,

    #[serde(default)]
    pub format: ReportFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            file_prefix: default_file_prefix(),
            output_dir: default_output_dir(),
            date_format: default_date_format(),
            time_format: default_time_format(),
            format: ReportFormat::default(),
        }
    }
}

impl ReportConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.file_prefix.trim().is_empty() {
            return Err(ConfigError::invalid("report.file_prefix", "must not be empty"));
        }
        if self.file_prefix.contains(['/', '\\']) {
            return Err(ConfigError::invalid(
                "report.file_prefix",
                "must not contain path separators",
            ));
        }
        self.timestamp_format()?;
        Ok(())
    }

    /// The date/time patterns as a checked [`TimestampFormat`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the pattern that is blank
    /// or cannot render a local wall-clock time.
    pub fn timestamp_format(&self) -> Result<TimestampFormat, ConfigError> {
        TimestampFormat::new(&self.date_format, &self.time_format).map_err(|error| match error {
            CoreError::InvalidFormat { field, pattern } => ConfigError::invalid(
                &format!("report.{field}_format"),
                format!("'{pattern}' is not a usable strftime pattern"),
            ),
            other => ConfigError::invalid("report", other.to_string()),
        })
    }
}
