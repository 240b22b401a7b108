//! The checklist session: one owned context object for the whole run.
//!
//! The presentation layer calls the `on_*` handlers in response to user
//! input. Each mutation re-derives [`Progress`] and hands it back. The note
//! requirement is only evaluated on demand ([`ChecklistSession::validate`])
//! and at export.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use sf_config::{ReportConfig, ReportFormat, SfConfig};
use sf_core::{
    Catalog, Clock, ItemStateStore, NetworkIdentity, Progress, SessionMetadata, StateSnapshot,
    TimestampFormat, ValidationReport, validate,
};
use sf_identity::{IdentityResolver, IdentityTracker};
use sf_report::{
    Document, DocumentEncoder, JsonEncoder, RenderOptions, TextEncoder, render, report_file_name,
    write_artifact,
};
use tokio::task::JoinHandle;

use crate::error::{ExportError, SessionError};

/// Shown in the info panel while no operator name is entered.
pub const OPERATOR_NOT_PROVIDED: &str = "Not provided";

// ---------------------------------------------------------------------------
// ExportSettings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub render: RenderOptions,
    pub file_prefix: String,
    pub output_dir: PathBuf,
    pub timestamp: TimestampFormat,
    pub format: ReportFormat,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            file_prefix: sf_report::DEFAULT_FILE_PREFIX.to_string(),
            output_dir: PathBuf::from("."),
            timestamp: TimestampFormat::default(),
            format: ReportFormat::default(),
        }
    }
}

impl ExportSettings {
    /// # Errors
    ///
    /// Returns [`SessionError::Core`] if a date/time pattern is invalid.
    pub fn from_config(config: &ReportConfig) -> Result<Self, SessionError> {
        Ok(Self {
            render: RenderOptions {
                title: config.title.clone(),
                ..RenderOptions::default()
            },
            file_prefix: config.file_prefix.clone(),
            output_dir: config.output_dir.clone(),
            timestamp: TimestampFormat::new(&config.date_format, &config.time_format)?,
            format: config.format,
        })
    }

    fn encoder(&self) -> Box<dyn DocumentEncoder> {
        match self.format {
            ReportFormat::Text => Box::new(TextEncoder),
            ReportFormat::Json => Box::new(JsonEncoder),
        }
    }
}

// ---------------------------------------------------------------------------
// Info panel
// ---------------------------------------------------------------------------

/// Freshly sampled session info for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoPanel {
    pub date: String,
    pub time: String,
    pub network_identity: String,
    pub operator_name: String,
}

impl InfoPanel {
    #[must_use]
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Date: {} Time: {}", self.date, self.time),
            format!("Device/Public IP: {}", self.network_identity),
            format!("QA Name: {}", self.operator_name),
        ]
    }
}

// ---------------------------------------------------------------------------
// ExportedReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub path: PathBuf,
    pub file_name: String,
    pub metadata: SessionMetadata,
    pub document: Document,
}

// ---------------------------------------------------------------------------
// ChecklistSession
// ---------------------------------------------------------------------------

pub struct ChecklistSession {
    catalog: Catalog,
    store: ItemStateStore,
    progress: Progress,
    operator_name: String,
    identity: IdentityTracker,
    resolver: Arc<IdentityResolver>,
    settings: ExportSettings,
}

impl ChecklistSession {
    /// Start a session: every item unchecked with an empty note, identity
    /// pending.
    #[must_use]
    pub fn new(catalog: Catalog, settings: ExportSettings, resolver: Arc<IdentityResolver>) -> Self {
        let store = ItemStateStore::initialize(&catalog);
        let progress = Progress::from_snapshot(&store.snapshot());
        tracing::debug!(
            categories = catalog.categories().len(),
            items = catalog.item_count(),
            "checklist session started"
        );
        Self {
            catalog,
            store,
            progress,
            operator_name: String::new(),
            identity: IdentityTracker::new(),
            resolver,
            settings,
        }
    }

    /// Build a session from configuration: catalog file or built-in script,
    /// identity providers and report settings.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Catalog`] for an unreadable or inconsistent
    /// catalog, [`SessionError::Core`] for invalid timestamp patterns and
    /// [`SessionError::Identity`] if the HTTP client cannot be built.
    pub fn from_config(config: &SfConfig) -> Result<Self, SessionError> {
        let catalog = match &config.catalog.path {
            Some(path) if !config.catalog.uses_builtin() => Catalog::load(path)?,
            _ => Catalog::store_and_forward(),
        };
        let settings = ExportSettings::from_config(&config.report)?;
        let resolver = Arc::new(IdentityResolver::from_config(&config.identity)?);
        Ok(Self::new(catalog, settings, resolver))
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot<'_> {
        self.store.snapshot()
    }

    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    #[must_use]
    pub const fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    #[must_use]
    pub fn operator_name(&self) -> &str {
        &self.operator_name
    }

    /// Whether the export action should be offered at all.
    #[must_use]
    pub fn export_enabled(&self) -> bool {
        !self.operator_name.trim().is_empty()
    }

    // -- handlers -----------------------------------------------------------

    /// Returns the new [`ChecklistSession::export_enabled`] state.
    pub fn on_operator_name_changed(&mut self, name: impl Into<String>) -> bool {
        self.operator_name = name.into();
        self.export_enabled()
    }

    /// # Errors
    ///
    /// Returns [`SessionError::Core`] if `item` is not in the catalog.
    pub fn on_toggle_completed(
        &mut self,
        item: &str,
        completed: bool,
    ) -> Result<Progress, SessionError> {
        self.store.set_completed(item, completed)?;
        Ok(self.recompute_progress())
    }

    /// # Errors
    ///
    /// Returns [`SessionError::Core`] if `item` is not in the catalog.
    pub fn on_note_changed(
        &mut self,
        item: &str,
        note: impl Into<String>,
    ) -> Result<Progress, SessionError> {
        self.store.set_note(item, note)?;
        Ok(self.recompute_progress())
    }

    fn recompute_progress(&mut self) -> Progress {
        self.progress = Progress::from_snapshot(&self.store.snapshot());
        tracing::debug!(
            completed = self.progress.completed,
            total = self.progress.total,
            "progress {}",
            self.progress
        );
        self.progress
    }

    // -- identity -----------------------------------------------------------

    #[must_use]
    pub const fn identity(&self) -> &IdentityTracker {
        &self.identity
    }

    #[must_use]
    pub fn network_identity(&self) -> NetworkIdentity {
        self.identity.current()
    }

    /// Start one background lookup over the provider list. The identity
    /// reads as pending until it finishes.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn refresh_identity(&self) -> JoinHandle<()> {
        self.identity.refresh(Arc::clone(&self.resolver))
    }

    /// Sample date and time now and combine them with the current identity
    /// and operator name.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Core`] if the timestamp cannot be formatted.
    pub fn info_panel(&self, clock: &impl Clock) -> Result<InfoPanel, SessionError> {
        let (date, time) = self.settings.timestamp.format(&clock.now())?;
        let operator_name = match self.operator_name.trim() {
            "" => OPERATOR_NOT_PROVIDED.to_string(),
            name => name.to_string(),
        };
        Ok(InfoPanel {
            date,
            time,
            network_identity: self.identity.current().display_value().to_string(),
            operator_name,
        })
    }

    // -- validation & export ------------------------------------------------

    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        validate(&self.catalog, &self.store.snapshot())
    }

    /// Check both gates, then render and write the report with the
    /// configured encoder.
    ///
    /// # Errors
    ///
    /// See [`ChecklistSession::export_with`].
    pub fn export(&self, clock: &impl Clock) -> Result<ExportedReport, ExportError> {
        self.export_with(clock, self.settings.encoder().as_ref())
    }

    /// Check both gates, then render and write the report.
    ///
    /// Gates run in order: operator name first, then the note requirement.
    /// A failed gate produces no file. Date and time are sampled exactly
    /// once, so header and file name always agree.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::OperatorNameRequired`],
    /// [`ExportError::NotesRequired`] with every violating item, or the
    /// underlying metadata/report error.
    pub fn export_with(
        &self,
        clock: &impl Clock,
        encoder: &dyn DocumentEncoder,
    ) -> Result<ExportedReport, ExportError> {
        if !self.export_enabled() {
            tracing::warn!("export blocked: operator name missing");
            return Err(ExportError::OperatorNameRequired);
        }

        let report = self.validate();
        if !report.is_valid() {
            tracing::warn!(
                violations = report.violations.len(),
                "export blocked: unchecked items without notes"
            );
            return Err(ExportError::NotesRequired(report));
        }

        let metadata = SessionMetadata::capture(
            &self.operator_name,
            &self.identity.current(),
            &clock.now(),
            &self.settings.timestamp,
        )?;
        let snapshot = self.store.snapshot();
        let document = render(&self.catalog, &snapshot, &metadata, &self.settings.render);
        let file_name =
            report_file_name(&self.settings.file_prefix, &metadata, encoder.extension());
        let bytes = encoder.encode(&document)?;
        let path = write_artifact(&self.settings.output_dir, &file_name, &bytes)?;

        tracing::info!(
            file = %file_name,
            operator = %metadata.operator_name,
            completion = %self.progress,
            "checklist report exported"
        );
        Ok(ExportedReport {
            path,
            file_name,
            metadata,
            document,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use sf_core::{CategoryDefinition, FixedClock};

    use super::*;

    fn offline_resolver() -> Arc<IdentityResolver> {
        Arc::new(IdentityResolver::new(Vec::new(), Duration::from_millis(50), "test").unwrap())
    }

    fn nine_item_session(output_dir: PathBuf) -> ChecklistSession {
        let catalog = Catalog::new(vec![
            CategoryDefinition::new("A", ["1", "2", "3", "4"]),
            CategoryDefinition::new("B", ["5", "6", "7", "8", "9"]),
        ])
        .unwrap();
        let settings = ExportSettings {
            output_dir,
            ..ExportSettings::default()
        };
        ChecklistSession::new(catalog, settings, offline_resolver())
    }

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2026, 10, 15)
                .unwrap()
                .and_hms_opt(14, 5, 9)
                .unwrap(),
        )
    }

    #[test]
    fn handlers_return_fresh_progress() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = nine_item_session(dir.path().to_path_buf());
        assert_eq!(session.progress(), Progress { completed: 0, total: 9 });

        let progress = session.on_toggle_completed("1", true).unwrap();
        assert_eq!(progress, Progress { completed: 1, total: 9 });

        // Notes change export eligibility, never the percentage.
        let progress = session.on_note_changed("2", "skipped").unwrap();
        assert_eq!(progress, Progress { completed: 1, total: 9 });
        assert_eq!(session.progress(), progress);
    }

    #[test]
    fn unknown_item_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = nine_item_session(dir.path().to_path_buf());
        assert!(session.on_toggle_completed("42", true).is_err());
        assert!(session.on_note_changed("42", "x").is_err());
        assert_eq!(session.progress().completed, 0);
    }

    #[rstest]
    #[case::empty("", false)]
    #[case::blank("  \t ", false)]
    #[case::name("Dana", true)]
    #[case::padded("  Dana ", true)]
    fn export_enabled_follows_operator_name(#[case] name: &str, #[case] enabled: bool) {
        let dir = tempfile::tempdir().unwrap();
        let mut session = nine_item_session(dir.path().to_path_buf());
        assert!(!session.export_enabled());
        assert_eq!(session.on_operator_name_changed(name), enabled);
        assert_eq!(session.export_enabled(), enabled);
    }

    #[test]
    fn info_panel_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = nine_item_session(dir.path().to_path_buf());

        let panel = session.info_panel(&clock()).unwrap();
        assert_eq!(
            panel.lines(),
            [
                "Date: 10/15/2026 Time: 2:05:09 PM".to_string(),
                "Device/Public IP: Loading...".to_string(),
                "QA Name: Not provided".to_string(),
            ]
        );

        session.on_operator_name_changed("  Dana ");
        session
            .identity()
            .set(NetworkIdentity::Resolved("192.0.2.1".into()));
        let panel = session.info_panel(&clock()).unwrap();
        assert_eq!(panel.operator_name, "Dana");
        assert_eq!(panel.network_identity, "192.0.2.1");
    }

    #[test]
    fn settings_from_config() {
        let config = ReportConfig {
            title: "Custom".into(),
            format: ReportFormat::Json,
            ..ReportConfig::default()
        };
        let settings = ExportSettings::from_config(&config).unwrap();
        assert_eq!(settings.render.title, "Custom");
        assert_eq!(settings.encoder().extension(), "json");
        assert_eq!(settings.file_prefix, "EMV_Testing_Checklist");
    }

    #[rstest]
    #[case::unknown_specifier("%Q", "%H:%M:%S")]
    #[case::timezone_name("%-m/%-d/%Y", "%H:%M:%S %Z")]
    #[case::offset("%-m/%-d/%Y", "%H:%M:%S %z")]
    fn settings_reject_unusable_pattern(#[case] date_format: &str, #[case] time_format: &str) {
        let config = ReportConfig {
            date_format: date_format.into(),
            time_format: time_format.into(),
            ..ReportConfig::default()
        };
        assert!(matches!(
            ExportSettings::from_config(&config),
            Err(SessionError::Core(_))
        ));
    }

    #[tokio::test]
    async fn refresh_with_no_providers_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let session = nine_item_session(dir.path().to_path_buf());
        assert!(session.network_identity().is_pending());

        session.refresh_identity().await.unwrap();
        assert_eq!(session.network_identity(), NetworkIdentity::Unavailable);
    }
}
