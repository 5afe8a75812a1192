//! Configuration primitives for CareerSpark.
//!
//! Stored in a machine-readable TOML file located at:
//!   %APPDATA%/CareerSpark/config/config.toml on Windows
//!   $XDG_DATA_HOME/CareerSpark/config/config.toml on Linux
//!   ~/Library/Application Support/CareerSpark/config/config.toml on macOS
//!
//! The config only carries presentation and export preferences. Lookup
//! input (type code, interest) is never written here.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// On-screen rendering preferences.
    #[serde(default)]
    pub display: DisplaySettings,
    /// Text report export preferences.
    #[serde(default)]
    pub export: ExportSettings,
}

/// How a resolved profile is laid out for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplaySettings {
    /// Separator placed between traits on the title card.
    #[serde(default = "default_trait_delimiter")]
    pub trait_delimiter: String,
    /// Whether career names are prefixed with their glyph.
    #[serde(default = "default_show_glyphs")]
    pub show_glyphs: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            trait_delimiter: default_trait_delimiter(),
            show_glyphs: default_show_glyphs(),
        }
    }
}

fn default_trait_delimiter() -> String {
    " · ".to_string()
}

const fn default_show_glyphs() -> bool {
    true
}

/// Where and how text reports are written.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ExportSettings {
    /// Target directory; `<workspace>/exports` when unset.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    /// Replace an existing report with the same file name without asking.
    #[serde(default = "default_overwrite_existing")]
    pub overwrite_existing: bool,
}

const fn default_overwrite_existing() -> bool {
    false
}

/// Standard relative path to the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable that relocates the whole workspace.
pub const HOME_ENV_VAR: &str = "CAREERSPARK_HOME";

use anyhow::{Context, Result};
use directories::BaseDirs;
use std::env;
use std::fs;

/// Returns the root directory where CareerSpark stores data.
///
/// Order of precedence:
/// 1. `CAREERSPARK_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var(HOME_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("CareerSpark"))
}

/// Ensures the workspace structure exists (config/, exports/ and logs/).
pub fn ensure_workspace_structure() -> Result<WorkspacePaths> {
    let paths = WorkspacePaths::at(workspace_root()?);
    paths.create_dirs()?;
    Ok(paths)
}

/// Convenience struct exposing important workspace paths.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub config_dir: PathBuf,
    pub exports_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl WorkspacePaths {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_dir: root.join("config"),
            exports_dir: root.join("exports"),
            logs_dir: root.join("logs"),
            root,
        }
    }

    pub fn create_dirs(&self) -> Result<()> {
        for dir in [&self.config_dir, &self.exports_dir, &self.logs_dir] {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        Ok(())
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Export directory honouring the configured override.
    pub fn export_dir(&self, config: &AppConfig) -> PathBuf {
        config
            .export
            .directory
            .clone()
            .unwrap_or_else(|| self.exports_dir.clone())
    }
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default(paths: &WorkspacePaths) -> Result<AppConfig> {
    let path = paths.config_file();
    if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(AppConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(paths: &WorkspacePaths, config: &AppConfig) -> Result<()> {
    fs::create_dir_all(&paths.config_dir)?;
    let data = toml::to_string_pretty(config)?;
    fs::write(paths.config_file(), data)?;
    Ok(())
}
