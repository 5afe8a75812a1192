pub mod lookup;

pub use lookup::{normalize_interest, ResolvedLookup, Selection};

use crate::orchestration::{
    log_profile_resolved, log_report_exported, ExportEventDetails, OrchestrationEvent,
    OrchestrationLog,
};
use crate::profiles::{CareerProfile, MbtiType, ProfileTable};
use crate::reports::{ExportRecord, ProfileView, ReportWriter, TextReport};
use crate::workspace::{ensure_workspace_structure, load_or_default, AppConfig, WorkspacePaths};
use anyhow::{Context, Result};

/// Both outputs of a single lookup.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub view: ProfileView,
    pub report: TextReport,
}

/// Host-side facade: config, workspace paths and the shared table.
pub struct AdvisorSession {
    config: AppConfig,
    paths: WorkspacePaths,
    table: &'static ProfileTable,
}

impl AdvisorSession {
    pub fn new() -> Result<Self> {
        let paths = ensure_workspace_structure()?;
        let config = load_or_default(&paths)?;
        Ok(Self::with_workspace(paths, config))
    }

    pub fn with_workspace(paths: WorkspacePaths, config: AppConfig) -> Self {
        Self {
            config,
            paths,
            table: ProfileTable::shared(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn paths(&self) -> &WorkspacePaths {
        &self.paths
    }

    pub fn available_types(&self) -> Vec<(MbtiType, &'static CareerProfile)> {
        self.table
            .codes()
            .into_iter()
            .map(|code| (code, self.table.resolve(code)))
            .collect()
    }

    /// Resolves and renders one selection, then records it in the activity log.
    ///
    /// The lookup itself cannot fail; an `Err` here always means the
    /// `profile_resolved` event could not be appended.
    pub fn lookup(&self, code: MbtiType, interest: Option<&str>) -> Result<LookupOutcome> {
        let resolved = Selection::new(code, interest).resolve(self.table);
        let outcome = LookupOutcome {
            view: resolved.render(&self.config.display),
            report: resolved.export(),
        };
        log_profile_resolved(&self.paths, code, resolved.selection().interest().is_some())
            .context("Failed to record the lookup in the activity log")?;
        Ok(outcome)
    }

    /// Writes the text report; `force` overrides the configured overwrite guard.
    pub fn export(
        &self,
        code: MbtiType,
        interest: Option<&str>,
        force: bool,
    ) -> Result<ExportRecord> {
        let resolved = Selection::new(code, interest).resolve(self.table);
        let report = resolved.export();
        let writer = ReportWriter::new(
            self.paths.export_dir(&self.config),
            force || self.config.export.overwrite_existing,
        );
        let record = writer.write(&report)?;
        log_report_exported(
            &self.paths,
            ExportEventDetails {
                type_code: code,
                file_name: report.file_name(),
                sha256: record.sha256.clone(),
                bytes: record.bytes,
                interest_provided: resolved.selection().interest().is_some(),
            },
        )?;
        Ok(record)
    }

    pub fn history(&self) -> Result<Vec<OrchestrationEvent>> {
        OrchestrationLog::for_workspace(&self.paths).load_events()
    }
}
