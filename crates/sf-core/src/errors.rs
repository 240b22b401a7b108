//! Error types for the checklist core.
//!
//! Catalog integrity problems get their own enum because they are fatal at
//! load time. Everything raised while a session is running is a
//! [`CoreError`].

use std::path::PathBuf;

use thiserror::Error;

/// Catalog integrity and loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two test items share a description, which is their identity.
    #[error("duplicate test item '{description}' (in '{first_category}' and '{second_category}')")]
    DuplicateItem {
        description: String,
        first_category: String,
        second_category: String,
    },

    /// A test item has an empty or whitespace-only description.
    #[error("category '{category}' contains a test item with an empty description")]
    EmptyItem { category: String },

    /// A category has an empty or whitespace-only name.
    #[error("category #{position} has an empty name")]
    EmptyCategory { position: usize },

    /// Catalog file could not be read.
    #[error("failed to read catalog file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not a valid catalog definition.
    #[error("failed to parse catalog definition: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors raised by state mutations and metadata capture.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The referenced test item is not part of the catalog.
    #[error("unknown test item: '{0}'")]
    UnknownItem(String),

    /// A date or time format string is not a valid strftime pattern.
    #[error("invalid {field} format '{pattern}'")]
    InvalidFormat { field: &'static str, pattern: String },

    /// Formatting a timestamp failed.
    #[error("failed to format {field}")]
    Format { field: &'static str },
}
