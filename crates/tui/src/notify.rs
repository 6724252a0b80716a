//! Desktop notifications for fired reminders.

use notify_rust::Notification;
use taskboard_reminder::ReminderEvent;

const APP_NAME: &str = "taskboard";

/// Shows an OS notification for a fired reminder.
///
/// The notification daemon is contacted on a blocking thread so a slow or
/// missing daemon never stalls the UI. Failures are logged and otherwise
/// ignored. Must be called from within a tokio runtime.
pub fn send_desktop_notification(event: &ReminderEvent, date_format: &str) {
    let summary = event.message();
    let body = format!(
        "Due {} {}",
        event.due.date().format(date_format),
        event.due.time().format("%H:%M")
    );
    let task = event.task_id;

    tokio::task::spawn_blocking(move || {
        if let Err(e) = Notification::new()
            .appname(APP_NAME)
            .summary(&summary)
            .body(&body)
            .show()
        {
            tracing::warn!(%task, error = %e, "desktop notification failed");
        }
    });
}
