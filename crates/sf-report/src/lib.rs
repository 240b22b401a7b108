//! # sf-report
//!
//! Turns checklist state into the exported report.
//!
//! Rendering is pure ([`render`]): catalog, item state and frozen
//! [`sf_core::SessionMetadata`] in, positioned-text [`Document`] out. The
//! file name ([`report_file_name`]) is derived from the same metadata, an
//! encoder turns the document into bytes, and [`write_artifact`] puts them
//! on disk atomically.

mod artifact;
mod document;
mod encode;
mod error;
mod filename;
mod render;

pub use artifact::write_artifact;
pub use document::{Document, Layout, LineKind, Page, TextPlacement};
pub use encode::{DocumentEncoder, JsonEncoder, TextEncoder};
pub use error::ReportError;
pub use filename::{DEFAULT_FILE_PREFIX, report_file_name};
pub use render::{DEFAULT_TITLE, RenderOptions, render};
