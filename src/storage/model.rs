use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::{
    catalog::CareAction,
    reminder::{Reminder, ReminderId, ReminderImage, ReminderTime},
};

/// Draft collected by the add-reminder form before it reaches the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReminder {
    pub name: String,
    pub image: Option<ReminderImage>,
    pub location: String,
    pub action: String,
    pub repeat_options: Vec<NaiveDate>,
    pub time: ReminderTime,
    pub last_watering: NaiveDate,
}

impl NewReminder {
    /// Form defaults: watering, repeating today, due now, last watered today.
    pub fn new(name: impl Into<String>, now: DateTime<Tz>) -> Self {
        let today = now.date_naive();
        Self {
            name: name.into(),
            image: None,
            location: String::new(),
            action: CareAction::default().to_string(),
            repeat_options: vec![today],
            time: ReminderTime::new(now.with_timezone(&Utc)),
            last_watering: today,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    pub fn with_image(mut self, image: ReminderImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_time(mut self, time: ReminderTime) -> Self {
        self.time = time;
        self
    }

    pub fn with_last_watering(mut self, last_watering: NaiveDate) -> Self {
        self.last_watering = last_watering;
        self
    }

    pub fn with_repeat_options(mut self, repeat_options: Vec<NaiveDate>) -> Self {
        self.repeat_options = repeat_options;
        self
    }

    pub fn add_repeat_date(&mut self, date: NaiveDate) {
        self.repeat_options.push(date);
    }

    pub fn into_reminder(self) -> Reminder {
        let NewReminder {
            name,
            image,
            location,
            action,
            repeat_options,
            time,
            last_watering,
        } = self;

        Reminder {
            id: ReminderId::new(),
            name,
            image,
            location,
            action,
            repeat_options,
            time,
            last_watering,
            is_completed: false,
        }
    }
}

impl From<NewReminder> for Reminder {
    fn from(value: NewReminder) -> Self {
        value.into_reminder()
    }
}

/// Replacement values for the editable fields of a reminder.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderEdit {
    pub name: String,
    pub location: String,
    pub action: String,
    pub repeat_options: Vec<NaiveDate>,
    pub time: ReminderTime,
    pub last_watering: NaiveDate,
}

impl ReminderEdit {
    /// Starts from the reminder's current values.
    pub fn from_reminder(reminder: &Reminder) -> Self {
        Self {
            name: reminder.name.clone(),
            location: reminder.location.clone(),
            action: reminder.action.clone(),
            repeat_options: reminder.repeat_options.clone(),
            time: reminder.time,
            last_watering: reminder.last_watering,
        }
    }

    pub(crate) fn apply(self, reminder: &mut Reminder) {
        reminder.name = self.name;
        reminder.location = self.location;
        reminder.action = self.action;
        reminder.repeat_options = self.repeat_options;
        reminder.time = self.time;
        reminder.last_watering = self.last_watering;
    }
}
