mod config;

pub use config::{
    ensure_workspace_structure, load_or_default, save, workspace_root, AppConfig,
    DisplaySettings, ExportSettings, WorkspacePaths, CONFIG_FILE_NAME, HOME_ENV_VAR,
};
