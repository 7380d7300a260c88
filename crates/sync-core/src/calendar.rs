//! Calendar item payload.

use crate::encode::{compact_date, write_bool, write_opt, Encode, SyncItem};
use crate::EntityType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tag_sink::{Result, TagSink};
use wbxml_types::tags::calendar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusyStatus {
    Free,
    Tentative,
    Busy,
    OutOfOffice,
}

impl BusyStatus {
    pub fn code(&self) -> u8 {
        match self {
            Self::Free => 0,
            Self::Tentative => 1,
            Self::Busy => 2,
            Self::OutOfOffice => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sensitivity {
    Normal,
    Personal,
    Private,
    Confidential,
}

impl Sensitivity {
    pub fn code(&self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Personal => 1,
            Self::Private => 2,
            Self::Confidential => 3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attendee {
    pub email: String,
    pub name: Option<String>,
}

/// A calendar item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appointment {
    pub uid: Option<String>,
    pub subject: Option<String>,
    pub location: Option<String>,
    pub organizer_name: Option<String>,
    pub organizer_email: Option<String>,
    pub dtstamp: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub all_day: bool,
    pub busy_status: Option<BusyStatus>,
    pub sensitivity: Option<Sensitivity>,
    /// Minutes before start.
    pub reminder: Option<u32>,
    pub body: Option<String>,
    pub attendees: Vec<Attendee>,
}

impl Encode for Appointment {
    fn encode(&self, sink: &mut dyn TagSink) -> Result<()> {
        if let Some(dtstamp) = &self.dtstamp {
            sink.element(calendar::DTSTAMP, &compact_date(dtstamp))?;
        }
        if let Some(start) = &self.start_time {
            sink.element(calendar::START_TIME, &compact_date(start))?;
        }
        write_opt(sink, calendar::SUBJECT, self.subject.as_deref())?;
        write_opt(sink, calendar::UID, self.uid.as_deref())?;
        write_opt(sink, calendar::ORGANIZER_NAME, self.organizer_name.as_deref())?;
        write_opt(sink, calendar::ORGANIZER_EMAIL, self.organizer_email.as_deref())?;
        write_opt(sink, calendar::LOCATION, self.location.as_deref())?;
        if let Some(end) = &self.end_time {
            sink.element(calendar::END_TIME, &compact_date(end))?;
        }
        write_opt(sink, calendar::BODY, self.body.as_deref())?;
        write_bool(sink, calendar::ALL_DAY_EVENT, self.all_day)?;
        if let Some(status) = self.busy_status {
            sink.element(calendar::BUSY_STATUS, &status.code().to_string())?;
        }
        if let Some(sensitivity) = self.sensitivity {
            sink.element(calendar::SENSITIVITY, &sensitivity.code().to_string())?;
        }
        if let Some(minutes) = self.reminder {
            sink.element(calendar::REMINDER, &minutes.to_string())?;
        }

        if !self.attendees.is_empty() {
            sink.start_tag(calendar::ATTENDEES)?;
            for attendee in &self.attendees {
                sink.start_tag(calendar::ATTENDEE)?;
                sink.element(calendar::ATTENDEE_EMAIL, &attendee.email)?;
                // Name is mandatory on the wire; fall back to the address.
                let name = attendee.name.as_deref().unwrap_or(&attendee.email);
                sink.element(calendar::ATTENDEE_NAME, name)?;
                sink.end_tag()?;
            }
            sink.end_tag()?;
        }

        Ok(())
    }
}

impl SyncItem for Appointment {
    fn entity_type(&self) -> EntityType {
        EntityType::Calendar
    }
}
