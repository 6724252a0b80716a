//! Registry of cancellable one-shot reminder timers.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use taskboard_protocol::{Task, TaskId};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;

/// Identifies one armed reminder.
///
/// Rescheduling a task arms a new reminder with a new ID, so an event can
/// be matched against the reminder that is currently registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReminderId(u64);

/// Delivered once when a reminder fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderEvent {
    /// The reminder that fired.
    pub id: ReminderId,
    /// The task the reminder belongs to.
    pub task_id: TaskId,
    /// The task title at the time the reminder was armed.
    pub title: String,
    /// The instant the reminder was due.
    pub due: NaiveDateTime,
}

impl ReminderEvent {
    /// Returns the notification text.
    #[must_use]
    pub fn message(&self) -> String {
        format!("Task due: {}", self.title)
    }
}

/// Describes a reminder that has just been armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledReminder {
    /// Identifier of the armed reminder.
    pub id: ReminderId,
    /// The task it belongs to.
    pub task_id: TaskId,
    /// The local instant it will fire at.
    pub fires_at: NaiveDateTime,
    /// How long until it fires.
    pub delay: Duration,
}

struct Pending {
    id: ReminderId,
    fires_at: NaiveDateTime,
    handle: JoinHandle<()>,
}

/// Returns the current local wall-clock time.
#[must_use]
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Returns how long to wait until `due`, or `None` if `due` is not after `now`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use chrono::NaiveDate;
/// use taskboard_reminder::delay_until;
///
/// let now = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let later = now + chrono::Duration::seconds(90);
///
/// assert_eq!(delay_until(later, now), Some(Duration::from_secs(90)));
/// assert_eq!(delay_until(now, now), None);
/// ```
#[must_use]
pub fn delay_until(due: NaiveDateTime, now: NaiveDateTime) -> Option<Duration> {
    if due <= now {
        return None;
    }
    (due - now).to_std().ok()
}

/// Arms and tracks one reminder per task.
///
/// Each reminder is a spawned tokio task that sleeps until the due instant
/// and then sends a single [`ReminderEvent`]. Scheduling a task again
/// replaces its pending reminder, and [`cancel`](Self::cancel) withdraws it,
/// so reminders for edited or deleted tasks never fire.
///
/// All pending timers are aborted when the scheduler is dropped.
pub struct ReminderScheduler {
    sender: UnboundedSender<ReminderEvent>,
    pending: HashMap<TaskId, Pending>,
    next_id: u64,
}

impl std::fmt::Debug for ReminderScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReminderScheduler")
            .field("pending", &self.pending.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl ReminderScheduler {
    /// Creates a scheduler and the receiving end of its event channel.
    #[must_use]
    pub fn new() -> (Self, UnboundedReceiver<ReminderEvent>) {
        let (sender, receiver) = unbounded_channel();
        let scheduler = Self {
            sender,
            pending: HashMap::new(),
            next_id: 0,
        };
        (scheduler, receiver)
    }

    /// Arms a reminder for `task` if its due instant is after `now`.
    ///
    /// Any reminder already pending for the task is cancelled first, even
    /// when the new due instant is in the past and nothing is armed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, task: &Task, now: NaiveDateTime) -> Option<ScheduledReminder> {
        self.cancel(task.id);

        let fires_at = task.due_instant();
        let Some(delay) = delay_until(fires_at, now) else {
            tracing::debug!(task = %task.id, due = %fires_at, "reminder not armed, due instant has passed");
            return None;
        };

        let id = ReminderId(self.next_id);
        self.next_id += 1;

        let event = ReminderEvent {
            id,
            task_id: task.id,
            title: task.title.clone(),
            due: fires_at,
        };
        let sender = self.sender.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver may be gone during shutdown; nothing to retry.
            let _ = sender.send(event);
        });

        tracing::debug!(task = %task.id, due = %fires_at, ?delay, "reminder armed");
        self.pending.insert(task.id, Pending { id, fires_at, handle });

        Some(ScheduledReminder {
            id,
            task_id: task.id,
            fires_at,
            delay,
        })
    }

    /// Withdraws the pending reminder for a task.
    ///
    /// Returns `true` if one was pending.
    pub fn cancel(&mut self, task_id: TaskId) -> bool {
        match self.pending.remove(&task_id) {
            Some(pending) => {
                pending.handle.abort();
                tracing::debug!(task = %task_id, "reminder cancelled");
                true
            }
            None => false,
        }
    }

    /// Withdraws every pending reminder.
    pub fn cancel_all(&mut self) {
        for (_, pending) in self.pending.drain() {
            pending.handle.abort();
        }
    }

    /// Forgets the registry entry for a reminder that has fired.
    ///
    /// Returns `true` if the event belongs to the reminder currently
    /// registered for its task. A `false` result means the event is stale
    /// and should not be shown.
    pub fn acknowledge(&mut self, event: &ReminderEvent) -> bool {
        let current = self
            .pending
            .get(&event.task_id)
            .is_some_and(|pending| pending.id == event.id);
        if current {
            self.pending.remove(&event.task_id);
        }
        current
    }

    /// Returns the instant the task's pending reminder fires at, if any.
    #[must_use]
    pub fn fires_at(&self, task_id: TaskId) -> Option<NaiveDateTime> {
        self.pending.get(&task_id).map(|pending| pending.fires_at)
    }

    /// Returns the number of reminders registered and not yet acknowledged.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// A delay exists exactly when the due instant is strictly in the future.
        #[test]
        fn delay_exists_iff_due_after_now(offset in -1_000_000i64..1_000_000) {
            let now = chrono::NaiveDate::from_ymd_opt(2025, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .expect("valid instant");
            let due = now + chrono::Duration::seconds(offset);

            let delay = delay_until(due, now);
            prop_assert_eq!(delay.is_some(), offset > 0);
            if let Some(delay) = delay {
                prop_assert_eq!(delay.as_secs(), offset.unsigned_abs());
            }
        }
    }
}
