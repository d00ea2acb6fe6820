use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::ConfigError;

/// Filesystem layout rooted at the installation directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PathsSettings {
    pub base_dir: PathBuf,
    pub database_dir: PathBuf,
    pub models_dir: PathBuf,
    pub controllers_dir: PathBuf,
    pub views_dir: PathBuf,
    pub utils_dir: PathBuf,
    pub resources_dir: PathBuf,
    pub icons_dir: PathBuf,
    pub fonts_dir: PathBuf,
    pub images_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub log_file: PathBuf,
    pub config_file: PathBuf,
    pub export_dir: PathBuf,
    pub backup_dir: PathBuf,
}

impl PathsSettings {
    pub fn rooted_at(base: impl Into<PathBuf>) -> Self {
        let base_dir = base.into();
        let resources_dir = base_dir.join("resources");
        Self {
            database_dir: base_dir.join("database"),
            models_dir: base_dir.join("models"),
            controllers_dir: base_dir.join("controllers"),
            views_dir: base_dir.join("views"),
            utils_dir: base_dir.join("utils"),
            icons_dir: resources_dir.join("icons"),
            fonts_dir: resources_dir.join("fonts"),
            images_dir: resources_dir.join("images"),
            templates_dir: resources_dir.join("templates"),
            log_file: base_dir.join("smartinstall.log"),
            config_file: base_dir.join("config.json"),
            export_dir: base_dir.join("exports"),
            backup_dir: base_dir.join("backups"),
            resources_dir,
            base_dir,
        }
    }

    /// Directories that must exist before the application touches disk,
    /// in creation order.
    pub fn required_directories(&self) -> [&Path; 7] {
        [
            self.resources_dir.as_path(),
            self.icons_dir.as_path(),
            self.fonts_dir.as_path(),
            self.images_dir.as_path(),
            self.templates_dir.as_path(),
            self.export_dir.as_path(),
            self.backup_dir.as_path(),
        ]
    }
}

/// Create every required directory. Existing directories are left alone.
///
/// Stops at the first directory that cannot be created and names it in the
/// error. Returns the directories that were ensured.
pub fn initialize_environment(paths: &PathsSettings) -> Result<Vec<PathBuf>, ConfigError> {
    let mut ensured = Vec::new();
    for dir in paths.required_directories() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
        debug!(path = %dir.display(), "directory ready");
        ensured.push(dir.to_path_buf());
    }
    Ok(ensured)
}
