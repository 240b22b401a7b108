//! Session error types.
//!
//! [`ExportError`] keeps the two user-facing gate failures apart so the
//! presentation layer can show the right message for each.

use sf_core::{CatalogError, CoreError, ValidationReport};
use sf_identity::IdentityError;
use sf_report::ReportError;
use thiserror::Error;

/// Errors while building or mutating a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The catalog failed integrity checks or could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// The identity HTTP client could not be built.
    #[error(transparent)]
    Identity(#[from] IdentityError),
}

/// Why an export produced no artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Operator name is empty or whitespace.
    #[error("QA Name required")]
    OperatorNameRequired,

    /// At least one item is neither checked nor explained.
    #[error("notes required for unchecked items")]
    NotesRequired(ValidationReport),

    /// Metadata capture failed.
    #[error(transparent)]
    Metadata(#[from] CoreError),

    /// Encoding or writing the artifact failed.
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl ExportError {
    /// Items to flag when the note requirement failed.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        match self {
            Self::NotesRequired(report) => &report.violations,
            _ => &[],
        }
    }
}
