use chrono::{Days, Utc};
use plantcare::{
    NewReminder, ReminderEdit, ReminderImage, ReminderStore, StoreEvent,
    appsettings::{self, AppSettings},
    catalog::{CareAction, PlantName},
};
use tokio::{sync::broadcast, task::JoinHandle};
use tokio_util::sync::CancellationToken;

fn init_logging(settings: &AppSettings) {
    if std::env::var_os("RUST_LOG").is_some() {
        pretty_env_logger::init();
    } else {
        pretty_env_logger::formatted_builder()
            .parse_filters(&settings.log_level)
            .init();
    }
}

/// Stand-in for the list view: re-renders whenever the store reports a change.
fn spawn_list_view(
    mut events: broadcast::Receiver<StoreEvent>,
    cancellation_token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                biased;
                event = events.recv() => match event {
                    Ok(event) => log::info!("List view re-rendering after {:?}", event),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        log::warn!("List view missed {skipped} store events, re-rendering from scratch");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                },
                _ = cancellation_token.cancelled() => {
                    log::info!("List view shutting down");
                    break;
                }
            }
        }
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let settings = appsettings::get()?;
    init_logging(settings);

    let tz = settings.store.timezone;
    log::info!("Starting plant care reminders in {}", tz);

    let mut store = ReminderStore::new(&settings.store);
    let cancellation_token = CancellationToken::new();
    let list_view = spawn_list_view(store.subscribe_channel(), cancellation_token.child_token());
    store.subscribe(|_: &StoreEvent, reminders: &[plantcare::Reminder]| {
        log::debug!("Header sees {} reminders", reminders.len());
    });

    let now = Utc::now().with_timezone(&tz);
    let rose = store.add_reminder(
        NewReminder::new(PlantName::Rose.as_str(), now)
            .with_location("Balcony")
            .into_reminder(),
    );

    let mut snake_plant = NewReminder::new(PlantName::SnakePlant.as_str(), now)
        .with_location("Living room")
        .with_action(CareAction::Misting.as_str())
        .with_image(ReminderImage::new(Vec::new()));
    if let Some(next_week) = now.date_naive().checked_add_days(Days::new(7)) {
        snake_plant.add_repeat_date(next_week);
    }
    let snake_plant = store.add_reminder(snake_plant.into_reminder());
    log::info!("{}", store.summary());

    if let Some(current) = store.get(snake_plant) {
        let mut edit = ReminderEdit::from_reminder(current);
        edit.action = CareAction::Fertilizing.to_string();
        store.edit_reminder(snake_plant, edit);
    }

    store.toggle_completion(rose);
    log::info!("{}", store.summary());

    store.complete_and_dismiss(snake_plant)?;
    log::info!("{}", store.summary());
    store.complete_and_dismiss(snake_plant)?;
    store.delete_reminders([0]);
    log::info!("{}", store.summary());

    cancellation_token.cancel();
    list_view.await?;

    Ok(())
}
