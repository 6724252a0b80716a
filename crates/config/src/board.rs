//! Board defaults: new-task priority and date display.

use std::fmt::Write as _;

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use taskboard_protocol::Priority;

use crate::error::{ConfigError, Result};

/// Default date format, day first (`31.12.2025`).
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Settings that shape how tasks are created and displayed.
///
/// # Examples
///
/// ```
/// use taskboard_config::BoardConfig;
/// use taskboard_protocol::Priority;
///
/// let config = BoardConfig::default();
/// assert_eq!(config.default_priority, Priority::Medium);
/// assert_eq!(config.date_format, "%d.%m.%Y");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Priority preselected in the new-task dialog.
    #[serde(default)]
    pub default_priority: Priority,

    /// strftime pattern used for due dates on cards, in the calendar and in exports.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_priority: Priority::default(),
            date_format: default_date_format(),
        }
    }
}

impl BoardConfig {
    /// Checks that `date_format` is a usable strftime pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDateFormat`] for empty or malformed
    /// patterns, and for patterns with time or zone fields, which a plain
    /// due date cannot fill in.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| ConfigError::InvalidDateFormat {
            format: self.date_format.clone(),
            reason: reason.to_string(),
        };

        if self.date_format.trim().is_empty() {
            return Err(invalid("format cannot be empty"));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(invalid("not a valid strftime pattern"));
        }
        let sample = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
        if write!(String::new(), "{}", sample.format(&self.date_format)).is_err() {
            return Err(invalid("pattern uses fields a date cannot supply"));
        }
        Ok(())
    }
}
