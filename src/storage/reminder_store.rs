
use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::{
    appsettings::StoreSettings,
    events::{ObserverRegistry, ReminderObserver, StoreEvent, SubscriptionId},
    reminder::{Reminder, ReminderId, local_date},
    summary::ReminderSummary,
};

use super::model::ReminderEdit;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("reminder {0} does not exist")]
    NotFound(ReminderId),
    #[error("position {index} is out of range for {len} reminders")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Owner of the session's reminders. Every mutation goes through here and is
/// reported to the registered observers.
pub struct ReminderStore {
    reminders: Vec<Reminder>,
    observers: ObserverRegistry,
    timezone: Tz,
}

impl Default for ReminderStore {
    fn default() -> Self {
        Self::new(&StoreSettings::default())
    }
}

impl ReminderStore {
    pub fn new(settings: &StoreSettings) -> Self {
        Self {
            reminders: Vec::new(),
            observers: ObserverRegistry::new(settings.event_capacity),
            timezone: settings.timezone,
        }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn subscribe(&mut self, observer: impl ReminderObserver + 'static) -> SubscriptionId {
        self.observers.subscribe(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn subscribe_channel(&self) -> broadcast::Receiver<StoreEvent> {
        self.observers.subscribe_channel()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.observer_count()
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn get(&self, id: ReminderId) -> Option<&Reminder> {
        self.reminders.iter().find(|reminder| reminder.id == id)
    }

    pub fn position_of(&self, id: ReminderId) -> Option<usize> {
        self.reminders.iter().position(|reminder| reminder.id == id)
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    /// Appends the reminder and returns the id it is stored under. A reminder
    /// whose id is already taken gets a fresh one.
    pub fn add_reminder(&mut self, mut reminder: Reminder) -> ReminderId {
        if self.get(reminder.id).is_some() {
            let fresh = ReminderId::new();
            log::warn!("Reminder id {} already taken, reassigning to {}", reminder.id, fresh);
            reminder.id = fresh;
        }

        let id = reminder.id;
        log::info!("Adding reminder {} ({})", id, reminder.name);
        self.reminders.push(reminder);
        self.notify(StoreEvent::Added { id });
        id
    }

    /// Removes the reminders at the given positions. Out-of-range positions
    /// turn the whole call into a no-op.
    pub fn delete_reminders(&mut self, positions: impl IntoIterator<Item = usize>) {
        if let Err(e) = self.try_delete_reminders(positions) {
            log::debug!("Ignoring delete: {e}");
        }
    }

    /// Removes the reminders at the given positions in one update and returns
    /// the removed ids in their former order.
    pub fn try_delete_reminders(
        &mut self,
        positions: impl IntoIterator<Item = usize>,
    ) -> Result<Vec<ReminderId>, StoreError> {
        let positions: BTreeSet<usize> = positions.into_iter().collect();
        let len = self.reminders.len();
        if let Some(&index) = positions.iter().find(|&&index| index >= len) {
            return Err(StoreError::IndexOutOfRange { index, len });
        }

        if positions.is_empty() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::with_capacity(positions.len());
        let mut index = 0;
        self.reminders.retain(|reminder| {
            let keep = !positions.contains(&index);
            if !keep {
                ids.push(reminder.id);
            }
            index += 1;
            keep
        });

        log::info!("Deleted {} reminders", ids.len());
        self.notify(StoreEvent::Deleted { ids: ids.clone() });
        Ok(ids)
    }

    pub fn toggle_completion(&mut self, id: ReminderId) {
        if let Err(e) = self.try_toggle_completion(id) {
            log::debug!("Ignoring toggle: {e}");
        }
    }

    /// Flips the completion flag and returns its new value.
    pub fn try_toggle_completion(&mut self, id: ReminderId) -> Result<bool, StoreError> {
        let reminder = self.find_mut(id)?;
        reminder.is_completed = !reminder.is_completed;
        let is_completed = reminder.is_completed;

        self.notify(StoreEvent::CompletionToggled { id, is_completed });
        Ok(is_completed)
    }

    pub fn edit_reminder(&mut self, id: ReminderId, edit: ReminderEdit) {
        if let Err(e) = self.try_edit_reminder(id, edit) {
            log::debug!("Ignoring edit: {e}");
        }
    }

    pub fn try_edit_reminder(&mut self, id: ReminderId, edit: ReminderEdit) -> Result<(), StoreError> {
        let reminder = self.find_mut(id)?;
        edit.apply(reminder);

        self.notify(StoreEvent::Edited { id });
        Ok(())
    }

    /// Checkbox behaviour of the list row: an open reminder is marked completed
    /// and stays listed, a completed one is toggled back and removed. Returns
    /// whether it was removed.
    pub fn complete_and_dismiss(&mut self, id: ReminderId) -> Result<bool, StoreError> {
        let position = self.position_of(id).ok_or(StoreError::NotFound(id))?;
        let was_completed = self.reminders[position].is_completed;
        self.try_toggle_completion(id)?;

        if was_completed {
            self.try_delete_reminders([position])?;
        }
        Ok(was_completed)
    }

    pub fn remaining_count(&self) -> usize {
        self.reminders.iter().filter(|r| !r.is_completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.reminders.iter().filter(|r| r.is_completed).count()
    }

    /// Reminders whose time falls on `date` in `tz`.
    pub fn due_on_count(&self, date: NaiveDate, tz: Tz) -> usize {
        self.reminders
            .iter()
            .filter(|r| r.time.is_on(date, tz))
            .count()
    }

    pub fn due_today_count_at(&self, now: DateTime<Utc>) -> usize {
        self.today(now)
            .map_or(0, |today| self.due_on_count(today, self.timezone))
    }

    pub fn due_today_count(&self) -> usize {
        self.due_today_count_at(Utc::now())
    }

    pub fn summary_at(&self, now: DateTime<Utc>) -> ReminderSummary {
        match self.today(now) {
            Some(today) => ReminderSummary::compute(&self.reminders, today, self.timezone),
            None => ReminderSummary {
                due_today: 0,
                remaining: self.remaining_count(),
                completed: self.completed_count(),
            },
        }
    }

    pub fn summary(&self) -> ReminderSummary {
        self.summary_at(Utc::now())
    }

    fn today(&self, now: DateTime<Utc>) -> Option<NaiveDate> {
        local_date(&now, self.timezone)
    }

    fn find_mut(&mut self, id: ReminderId) -> Result<&mut Reminder, StoreError> {
        self.reminders
            .iter_mut()
            .find(|reminder| reminder.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn notify(&mut self, event: StoreEvent) {
        self.observers.notify(event, &self.reminders);
    }
}
