use std::fmt;

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::reminder::Reminder;

/// Counts shown in the list header.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ReminderSummary {
    pub due_today: usize,
    pub remaining: usize,
    pub completed: usize,
}

impl ReminderSummary {
    pub fn compute(reminders: &[Reminder], today: NaiveDate, tz: Tz) -> Self {
        reminders
            .iter()
            .fold(Self::default(), |mut summary, reminder| {
                if reminder.time.is_on(today, tz) {
                    summary.due_today += 1;
                }
                if reminder.is_completed {
                    summary.completed += 1;
                } else {
                    summary.remaining += 1;
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.remaining + self.completed
    }
}

impl fmt::Display for ReminderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Due Today: {}  Remaining: {}  Completed: {}",
            self.due_today, self.remaining, self.completed
        )
    }
}
