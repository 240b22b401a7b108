//! # sf-session
//!
//! The checklist session context that the presentation layer drives.
//!
//! A [`ChecklistSession`] owns the catalog, the item state store, the
//! operator name and the network identity tracker. User input arrives as
//! explicit handler calls; export runs the operator-name gate, then the note
//! gate, then renders and writes the report.

mod error;
mod session;
pub mod telemetry;

pub use error::{ExportError, SessionError};
pub use session::{
    ChecklistSession, ExportSettings, ExportedReport, InfoPanel, OPERATOR_NOT_PROVIDED,
};
