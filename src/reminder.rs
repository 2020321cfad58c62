use std::fmt;

use chrono::{DateTime, NaiveDate, Offset, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReminderId(uuid::Uuid);

impl ReminderId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ReminderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Moment the reminder is set for. Sub-second precision is dropped.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReminderTime(DateTime<Utc>);

impl ReminderTime {
    pub fn new(inner: DateTime<Utc>) -> Self {
        // Zero nanoseconds is valid for every timestamp.
        let normalized = inner.with_nanosecond(0).unwrap_or(inner);
        Self(normalized)
    }

    pub fn instant(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// `None` when the local wall clock falls outside chrono's range.
    pub fn local_date(&self, tz: Tz) -> Option<NaiveDate> {
        local_date(&self.0, tz)
    }

    pub fn is_on(&self, date: NaiveDate, tz: Tz) -> bool {
        self.local_date(tz) == Some(date)
    }
}

/// Calendar date of `instant` in `tz`, without panicking near the ends of
/// chrono's range.
pub fn local_date(instant: &DateTime<Utc>, tz: Tz) -> Option<NaiveDate> {
    let naive = instant.naive_utc();
    let offset = tz.offset_from_utc_datetime(&naive).fix();
    naive.checked_add_offset(offset).map(|local| local.date())
}

impl From<DateTime<Utc>> for ReminderTime {
    fn from(value: DateTime<Utc>) -> Self {
        Self::new(value)
    }
}

/// Opaque image payload handed over by the image picker.
#[derive(Clone, PartialEq, Eq)]
pub struct ReminderImage(Vec<u8>);

impl ReminderImage {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Debug for ReminderImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReminderImage({} bytes)", self.0.len())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ReminderId,
    pub name: String,
    pub image: Option<ReminderImage>,
    pub location: String,
    pub action: String,
    pub repeat_options: Vec<NaiveDate>,
    pub time: ReminderTime,
    pub last_watering: NaiveDate,
    pub is_completed: bool,
}
