pub mod appsettings;
pub mod catalog;
pub mod events;
pub mod reminder;
pub mod storage;
pub mod summary;

pub use events::{ReminderObserver, StoreEvent, SubscriptionId};
pub use reminder::{Reminder, ReminderId, ReminderImage, ReminderTime};
pub use storage::{NewReminder, ReminderEdit, ReminderStore, StoreError};
pub use summary::ReminderSummary;
