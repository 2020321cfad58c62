use tokio::sync::broadcast;

use crate::reminder::{Reminder, ReminderId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added { id: ReminderId },
    Deleted { ids: Vec<ReminderId> },
    CompletionToggled { id: ReminderId, is_completed: bool },
    Edited { id: ReminderId },
}

/// Presentation-side listener. Called after each mutation with the
/// resulting snapshot.
pub trait ReminderObserver: Send {
    fn reminders_changed(&mut self, event: &StoreEvent, reminders: &[Reminder]);
}

impl<F> ReminderObserver for F
where
    F: FnMut(&StoreEvent, &[Reminder]) + Send,
{
    fn reminders_changed(&mut self, event: &StoreEvent, reminders: &[Reminder]) {
        self(event, reminders)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub(crate) struct ObserverRegistry {
    next_id: u64,
    observers: Vec<(SubscriptionId, Box<dyn ReminderObserver>)>,
    sender: broadcast::Sender<StoreEvent>,
}

impl ObserverRegistry {
    pub fn new(channel_capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(channel_capacity.max(1));
        Self {
            next_id: 0,
            observers: Vec::new(),
            sender,
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn ReminderObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        before != self.observers.len()
    }

    pub fn subscribe_channel(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }

    pub fn notify(&mut self, event: StoreEvent, reminders: &[Reminder]) {
        log::debug!("Store changed: {:?}", event);
        for (_, observer) in self.observers.iter_mut() {
            observer.reminders_changed(&event, reminders);
        }

        self.sender.send(event).ok();
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
