use careerspark::workspace::{AppConfig, WorkspacePaths};
use careerspark::AdvisorSession;
use std::path::Path;
use tempfile::TempDir;

pub struct IntegrationHarness {
    workspace: TempDir,
    paths: WorkspacePaths,
}

impl IntegrationHarness {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        let paths = WorkspacePaths::at(workspace.path());
        paths
            .create_dirs()
            .expect("failed to create workspace directories");
        Self { workspace, paths }
    }

    pub fn workspace_path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn paths(&self) -> &WorkspacePaths {
        &self.paths
    }

    pub fn session(&self) -> AdvisorSession {
        self.session_with(AppConfig::default())
    }

    pub fn session_with(&self, config: AppConfig) -> AdvisorSession {
        AdvisorSession::with_workspace(self.paths.clone(), config)
    }
}

mod activity_log;
mod export_files;
mod lookup_flow;
mod session_config;
