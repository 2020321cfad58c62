mod model;
mod reminder_store;

pub use model::{NewReminder, ReminderEdit};
pub use reminder_store::{ReminderStore, StoreError};
