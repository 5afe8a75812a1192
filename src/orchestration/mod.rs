use crate::profiles::MbtiType;
use crate::workspace::WorkspacePaths;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

const EVENTS_FILE: &str = "events.jsonl";

/// Type of activity events that can be logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    WorkspaceInitialized,
    ProfileResolved,
    ReportExported,
}

/// General-purpose activity event stored as JSONL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestrationEvent {
    pub event_id: Uuid,
    pub event_type: EventType,
    pub timestamp: DateTime<Utc>,
    pub details: serde_json::Value,
}

/// Payload for `report_exported`. Carries whether an interest was given,
/// never the interest itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportEventDetails {
    pub type_code: MbtiType,
    pub file_name: String,
    pub sha256: String,
    pub bytes: usize,
    pub interest_provided: bool,
}

/// Wraps the log path for a workspace.
pub struct OrchestrationLog {
    events_path: PathBuf,
}

impl OrchestrationLog {
    pub fn for_workspace(paths: &WorkspacePaths) -> Self {
        Self {
            events_path: paths.logs_dir.join(EVENTS_FILE),
        }
    }

    pub fn events_path(&self) -> &PathBuf {
        &self.events_path
    }

    pub fn append_event(&self, event: &OrchestrationEvent) -> Result<()> {
        if let Some(parent) = self.events_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.events_path)
            .with_context(|| format!("Failed to open {}", self.events_path.display()))?;
        file.write_all(serde_json::to_string(event)?.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    pub fn load_events(&self) -> Result<Vec<OrchestrationEvent>> {
        if !self.events_path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.events_path)
            .with_context(|| format!("Failed to read {}", self.events_path.display()))?;
        let mut events = Vec::new();
        for line in data.lines().filter(|l| !l.trim().is_empty()) {
            let event: OrchestrationEvent = serde_json::from_str(line)
                .with_context(|| format!("Corrupt event line in {}", self.events_path.display()))?;
            events.push(event);
        }
        Ok(events)
    }
}

/// Appends an event with a fresh id and the current timestamp.
pub fn log_event(
    paths: &WorkspacePaths,
    event_type: EventType,
    details: serde_json::Value,
) -> Result<Uuid> {
    let event = OrchestrationEvent {
        event_id: Uuid::new_v4(),
        event_type,
        timestamp: Utc::now(),
        details,
    };
    OrchestrationLog::for_workspace(paths).append_event(&event)?;
    Ok(event.event_id)
}

pub fn log_profile_resolved(
    paths: &WorkspacePaths,
    type_code: MbtiType,
    interest_provided: bool,
) -> Result<Uuid> {
    log_event(
        paths,
        EventType::ProfileResolved,
        serde_json::json!({
            "type_code": type_code,
            "interest_provided": interest_provided,
        }),
    )
}

pub fn log_report_exported(paths: &WorkspacePaths, details: ExportEventDetails) -> Result<Uuid> {
    log_event(
        paths,
        EventType::ReportExported,
        serde_json::to_value(details)?,
    )
}
