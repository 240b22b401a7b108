//! Session metadata attached to a report: operator, timestamp and network
//! identity.
//!
//! Date and time are formatted once, at capture. The report header and the
//! artifact file name both read the captured strings, so they can never
//! disagree.

use std::fmt::{self, Write as _};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Shown while the identity lookup is still running.
pub const IDENTITY_PENDING: &str = "Loading...";

/// Shown when every identity provider failed.
pub const IDENTITY_UNAVAILABLE: &str = "Unable to fetch public IP";

// ---------------------------------------------------------------------------
// NetworkIdentity
// ---------------------------------------------------------------------------

/// Resolution state of the device's public network address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "address")]
pub enum NetworkIdentity {
    #[default]
    Pending,
    Resolved(String),
    Unavailable,
}

impl NetworkIdentity {
    /// Text shown in the info panel and the report header.
    #[must_use]
    pub fn display_value(&self) -> &str {
        match self {
            Self::Pending => IDENTITY_PENDING,
            Self::Resolved(address) => address,
            Self::Unavailable => IDENTITY_UNAVAILABLE,
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl fmt::Display for NetworkIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_value())
    }
}

// ---------------------------------------------------------------------------
// TimestampFormat
// ---------------------------------------------------------------------------

pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";
pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M:%S %p";

/// Artifact file name prefix unless configured otherwise.
pub const DEFAULT_FILE_PREFIX: &str = "EMV_Testing_Checklist";

/// Validated strftime patterns for the date and time strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampFormat {
    date: String,
    time: String,
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self {
            date: DEFAULT_DATE_FORMAT.to_string(),
            time: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl TimestampFormat {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidFormat`] if either pattern is blank or
    /// cannot render a local wall-clock time (unknown specifiers, or
    /// timezone specifiers such as `%Z` that need an offset).
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Result<Self, CoreError> {
        let date = date.into();
        let time = time.into();
        check_pattern("date", &date)?;
        check_pattern("time", &time)?;
        Ok(Self { date, time })
    }

    /// Format `(date, time)` strings for `at`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Format`] if chrono cannot render a field.
    pub fn format(&self, at: &NaiveDateTime) -> Result<(String, String), CoreError> {
        let mut date = String::new();
        write!(date, "{}", at.format(&self.date)).map_err(|_| CoreError::Format { field: "date" })?;
        let mut time = String::new();
        write!(time, "{}", at.format(&self.time)).map_err(|_| CoreError::Format { field: "time" })?;
        Ok((date, time))
    }
}

/// Trial-render `pattern` against a naive timestamp.
fn check_pattern(field: &'static str, pattern: &str) -> Result<(), CoreError> {
    let invalid = || CoreError::InvalidFormat {
        field,
        pattern: pattern.to_string(),
    };
    if pattern.trim().is_empty() {
        return Err(invalid());
    }
    let mut rendered = String::new();
    write!(rendered, "{}", NaiveDateTime::default().format(pattern)).map_err(|_| invalid())
}

// ---------------------------------------------------------------------------
// SessionMetadata
// ---------------------------------------------------------------------------

/// Frozen metadata for one report render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionMetadata {
    pub operator_name: String,
    pub date: String,
    pub time: String,
    pub network_identity: String,
}

impl SessionMetadata {
    /// Capture metadata at `at`. The operator name is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Format`] if the timestamp cannot be formatted.
    pub fn capture(
        operator_name: &str,
        identity: &NetworkIdentity,
        at: &NaiveDateTime,
        format: &TimestampFormat,
    ) -> Result<Self, CoreError> {
        let (date, time) = format.format(at)?;
        Ok(Self {
            operator_name: operator_name.trim().to_string(),
            date,
            time,
            network_identity: identity.display_value().to_string(),
        })
    }
}
