//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the taskboard application.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::BoardConfig;
use crate::error::Result;
use crate::export::ExportConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};
use crate::reminders::ReminderConfig;

/// The main configuration struct for the taskboard application.
///
/// Every section is optional in the file; missing sections take their
/// defaults. The colour theme is not part of the file: the board always
/// starts in light mode.
///
/// # Examples
///
/// ```
/// use taskboard_config::{BoardConfig, Config};
/// use taskboard_protocol::Priority;
///
/// let config = Config::default();
/// assert!(config.reminders.enabled);
///
/// let config = Config {
///     board: BoardConfig {
///         default_priority: Priority::High,
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Task defaults and date display.
    #[serde(default)]
    pub board: BoardConfig,

    /// Reminder behaviour.
    #[serde(default)]
    pub reminders: ReminderConfig,

    /// Export prompt defaults.
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Loads configuration from the default file locations.
    ///
    /// Searches `./taskboard.json5`, `./taskboard.json`, then the user
    /// config directory. If no file is found, returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::load_from(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Loads and validates configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use taskboard_config::Config;
    ///
    /// # fn example() -> taskboard_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns the first section error found.
    pub fn validate(&self) -> Result<()> {
        self.board.validate()?;
        self.export.validate()?;
        Ok(())
    }
}
