use crate::reports::text_export::TextReport;
use anyhow::{bail, Context, Result};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const STAGING_DIR: &str = ".staging";

/// Result of a committed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    pub path: PathBuf,
    pub sha256: String,
    pub bytes: usize,
}

/// Writes text reports into an export directory via a staging file.
pub struct ReportWriter {
    export_dir: PathBuf,
    overwrite_existing: bool,
}

impl ReportWriter {
    pub fn new(export_dir: impl Into<PathBuf>, overwrite_existing: bool) -> Self {
        Self {
            export_dir: export_dir.into(),
            overwrite_existing,
        }
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Stages the report beside its target and renames it into place. Without
    /// `overwrite_existing` the target is claimed with `create_new` first, so a
    /// file that appears meanwhile is never replaced.
    pub fn write(&self, report: &TextReport) -> Result<ExportRecord> {
        let final_path = self.export_dir.join(report.file_name());
        let staging_dir = self.export_dir.join(STAGING_DIR);
        fs::create_dir_all(&staging_dir)
            .with_context(|| format!("Failed to create {}", staging_dir.display()))?;
        let staged_path = staging_dir.join(Uuid::new_v4().to_string());
        let outcome = fs::write(&staged_path, report.as_bytes())
            .with_context(|| format!("Failed to stage {}", staged_path.display()))
            .and_then(|_| self.commit(&staged_path, &final_path));
        let _ = fs::remove_file(&staged_path);
        // Fails harmlessly while another export still has a file staged.
        let _ = fs::remove_dir(&staging_dir);
        outcome?;
        Ok(ExportRecord {
            path: final_path,
            sha256: report.sha256(),
            bytes: report.as_bytes().len(),
        })
    }

    fn commit(&self, staged_path: &Path, final_path: &Path) -> Result<()> {
        if !self.overwrite_existing {
            claim(final_path)?;
        }
        fs::rename(staged_path, final_path).map_err(|err| {
            if !self.overwrite_existing {
                let _ = fs::remove_file(final_path);
            }
            anyhow::Error::new(err).context(format!(
                "Failed to move {} to {}",
                staged_path.display(),
                final_path.display()
            ))
        })
    }
}

fn claim(final_path: &Path) -> Result<()> {
    match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(final_path)
    {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == ErrorKind::AlreadyExists => bail!(
            "Report {} already exists. Re-run with --force to replace it.",
            final_path.display()
        ),
        Err(err) => Err(anyhow::Error::new(err)
            .context(format!("Failed to create {}", final_path.display()))),
    }
}
