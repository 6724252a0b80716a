//! PDF export destination defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default export file name.
pub const DEFAULT_FILE_NAME: &str = "kanban.pdf";

/// Where the export prompt points by default.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use taskboard_config::ExportConfig;
///
/// let config = ExportConfig {
///     directory: Some(PathBuf::from("/tmp/exports")),
///     ..Default::default()
/// };
/// assert_eq!(config.default_path(), PathBuf::from("/tmp/exports/kanban.pdf"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory prefilled in the export prompt. The working directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// File name prefilled in the export prompt.
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: default_file_name(),
        }
    }
}

impl ExportConfig {
    /// Returns the path prefilled in the export prompt.
    ///
    /// A leading `~` in `directory` stands for the home directory.
    #[must_use]
    pub fn default_path(&self) -> PathBuf {
        match &self.directory {
            Some(dir) => expand_home(dir).join(&self.file_name),
            None => PathBuf::from(&self.file_name),
        }
    }

    /// Checks that the file name is a bare `.pdf` name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidExportFileName`] if the name is empty,
    /// contains a directory component, or lacks the `.pdf` extension.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| ConfigError::InvalidExportFileName {
            name: self.file_name.clone(),
            reason: reason.to_string(),
        };

        let name = Path::new(&self.file_name);
        if self.file_name.trim().is_empty() {
            return Err(invalid("file name cannot be empty"));
        }
        if name.components().count() != 1 {
            return Err(invalid("file name cannot contain directories"));
        }
        let is_pdf = name
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            return Err(invalid("file name must end in .pdf"));
        }
        Ok(())
    }
}

/// Replaces a leading `~` component with the home directory.
///
/// Paths are returned unchanged when there is no home directory.
fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
