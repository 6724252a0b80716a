//! Reminder behaviour.

use serde::{Deserialize, Serialize};

/// Controls whether reminders are armed and how they are delivered.
///
/// Reminders always show up inside the application. Desktop notifications
/// are an additional, opt-in channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// Arm a reminder for every task whose due instant is in the future.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Also raise an operating system notification when a reminder fires.
    #[serde(default)]
    pub desktop_notifications: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            desktop_notifications: false,
        }
    }
}
