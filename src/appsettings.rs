use std::sync::OnceLock;

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct StoreSettings {
    /// Zone whose calendar day decides what is "due today".
    pub timezone: chrono_tz::Tz,
    /// Buffered events per channel subscriber before it starts lagging.
    pub event_capacity: usize,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Tz::UTC,
            event_capacity: 64,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub log_level: String,
    pub store: StoreSettings,
}

impl AppSettings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = StoreSettings::default();
        let builder = Config::builder()
            .set_default("log_level", "info")?
            .set_default("store.timezone", defaults.timezone.name())?
            .set_default("store.event_capacity", defaults.event_capacity as u64)?
            .add_source(File::with_name("appsettings").required(false))
            .add_source(File::with_name("appsettings.local").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"));

        Ok(builder)
    }
}

pub fn get() -> Result<&'static AppSettings, ConfigError> {
    static APPSETTINGS: OnceLock<AppSettings> = OnceLock::new();
    if let Some(settings) = APPSETTINGS.get() {
        return Ok(settings);
    }

    let settings = AppSettings::load()?;
    Ok(APPSETTINGS.get_or_init(|| settings))
}
