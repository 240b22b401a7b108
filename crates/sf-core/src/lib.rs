//! # sf-core
//!
//! Checklist state engine for the store-and-forward test script.
//!
//! - [`catalog`]: the fixed, ordered categories and test items
//! - [`state`]: per-item completion flag and note
//! - [`progress`]: completion percentage (completion flags only)
//! - [`validator`]: the "checked off or explained" requirement
//! - [`metadata`]: operator, timestamp and network identity for a report
//! - [`clock`]: wall-clock source

mod builtin;

pub mod catalog;
pub mod clock;
pub mod errors;
pub mod metadata;
pub mod progress;
pub mod state;
pub mod validator;

pub use catalog::{
    Catalog, CatalogDefinition, Category, CategoryDefinition, DEFAULT_TITLE, TestItem,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{CatalogError, CoreError};
pub use metadata::{
    DEFAULT_DATE_FORMAT, DEFAULT_FILE_PREFIX, DEFAULT_TIME_FORMAT, NetworkIdentity,
    SessionMetadata, TimestampFormat,
};
pub use progress::Progress;
pub use state::{ItemState, ItemStateStore, StateSnapshot};
pub use validator::{ValidationReport, validate};
