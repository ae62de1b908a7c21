use crate::calendar::CalendarSettings;
use crate::date::{clamp_day, date_of_timestamp, get_month_length};
use crate::shared::entity::{Entity, ID};
use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Yearly countdown target, e.g. a birthday or anniversary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Countdown {
    pub id: ID,
    pub title: String,
    /// Target month, January -> 1
    pub month: u32,
    /// Target day-of-month. 29, 30 and 31 clamp to the end of short months.
    pub day: u32,
    pub created: i64,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidCountdownError {
    #[error("Countdown date month: {0} and day: {1} is not a valid date")]
    InvalidDate(u32, u32),
}

impl Countdown {
    pub fn new(
        title: &str,
        month: u32,
        day: u32,
        created: i64,
    ) -> Result<Self, InvalidCountdownError> {
        if !(1..=12).contains(&month) {
            return Err(InvalidCountdownError::InvalidDate(month, day));
        }
        // Validate the day against a leap year so Feb 29 targets are allowed
        if day < 1 || day > get_month_length(2000, month) {
            return Err(InvalidCountdownError::InvalidDate(month, day));
        }
        Ok(Self {
            id: Default::default(),
            title: title.to_string(),
            month,
            day,
            created,
        })
    }

    /// Projects this countdown onto the calendar as seen from `today_ts`.
    /// When this year's occurrence has already passed, the projection
    /// targets next year's occurrence.
    pub fn project(&self, today_ts: i64, settings: &CalendarSettings) -> CountdownProjection {
        let tz = settings.timezone;
        let today = date_of_timestamp(today_ts, &tz);

        let mut year = today.year();
        let mut target =
            NaiveDate::from_ymd(year, self.month, clamp_day(year, self.month, self.day));
        if target < today {
            year += 1;
            target = NaiveDate::from_ymd(year, self.month, clamp_day(year, self.month, self.day));
        }

        let target_ts = tz
            .ymd(target.year(), target.month(), target.day())
            .and_hms(0, 0, 0)
            .timestamp_millis();

        CountdownProjection {
            id: self.id.clone(),
            title: self.title.clone(),
            target_ts,
            days_left: (target - today).num_days(),
        }
    }
}

impl Entity for Countdown {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Read-only projection of a `Countdown` into event shape, recomputed on
/// every load and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownProjection {
    pub id: ID,
    pub title: String,
    pub target_ts: i64,
    pub days_left: i64,
}
