use crate::calendar::CalendarSettings;
use crate::date::{add_months, clamp_day};
use crate::event_instance::EventInstance;
use crate::shared::entity::{Entity, ID};
use crate::shared::recurrence::{RecurrenceFrequency, RecurrenceRule, MAX_OCCURRENCES};
use chrono::prelude::*;
use chrono::Duration;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// User authored event definition, possibly recurring.
///
/// Only the template is persisted by the event store. The concrete
/// occurrences it represents are produced by `expand` and regenerated in
/// full whenever the template changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateEvent {
    pub id: ID,
    pub name: String,
    /// Absent start means the event is undated and floats to the current day
    pub start_ts: Option<i64>,
    pub end_ts: Option<i64>,
    pub recurrence: Option<RecurrenceRule>,
    pub created: i64,
    pub updated: i64,
}

impl Entity for TemplateEvent {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl TemplateEvent {
    pub fn get_max_timestamp() -> i64 {
        4102444800000 // Fri Jan 01 2100 00:00:00 GMT+0000
    }

    pub fn duration_millis(&self) -> i64 {
        match (self.start_ts, self.end_ts) {
            (Some(start_ts), Some(end_ts)) => end_ts - start_ts,
            _ => 0,
        }
    }

    pub fn set_recurrence(&mut self, recurrence: RecurrenceRule) -> bool {
        let start_ts = match self.start_ts {
            Some(start_ts) => start_ts,
            // An undated event does not recur
            None => return false,
        };
        if !recurrence.is_valid(start_ts) {
            return false;
        }
        self.recurrence = Some(recurrence);
        true
    }

    /// Materializes the concrete occurrences of this template.
    ///
    /// Undated templates yield a single occurrence anchored at `today_ts`.
    /// Recurring templates step one calendar unit at a time from the start
    /// timestamp, where a monthly or yearly step that lands on a
    /// day-of-month the target month does not have is clamped to the last
    /// day of that month. The anchor day is taken from the template, so a
    /// clamped occurrence does not shorten the ones after it.
    ///
    /// Expansion is idempotent: occurrence ids are derived from the
    /// template id and the occurrence index.
    pub fn expand(&self, today_ts: i64, settings: &CalendarSettings) -> Vec<EventInstance> {
        let start_ts = match self.start_ts {
            Some(start_ts) => start_ts,
            None => return vec![EventInstance::derived(&self.id, 0, today_ts, today_ts)],
        };
        let duration = self.duration_millis();

        let rule = match &self.recurrence {
            Some(rule) if rule.is_valid(start_ts) => rule,
            // A rule the expander cannot make sense of downgrades the
            // event to non-recurring instead of aborting the expansion
            _ => {
                return vec![EventInstance::derived(
                    &self.id,
                    0,
                    start_ts,
                    start_ts + duration,
                )]
            }
        };

        let start = settings.timezone.timestamp_millis(start_ts);
        let count = rule.count.unwrap_or(MAX_OCCURRENCES).min(MAX_OCCURRENCES);

        let mut instances = Vec::with_capacity(count as usize);
        for occurrence_index in 0..count {
            let occurrence_start = nth_occurrence_start(&start, &rule.freq, occurrence_index);
            if let Some(until) = rule.until {
                if occurrence_start > until {
                    break;
                }
            }
            instances.push(EventInstance::derived(
                &self.id,
                occurrence_index,
                occurrence_start,
                occurrence_start + duration,
            ));
        }

        instances
    }
}

fn nth_occurrence_start(start: &DateTime<Tz>, freq: &RecurrenceFrequency, nth: u32) -> i64 {
    let start_date = start.date().naive_local();
    let date = match freq {
        RecurrenceFrequency::Daily => start_date + Duration::days(nth as i64),
        RecurrenceFrequency::Weekly => start_date + Duration::days(7 * nth as i64),
        RecurrenceFrequency::Monthly => {
            let (year, month) = add_months(start_date.year(), start_date.month(), nth);
            NaiveDate::from_ymd(year, month, clamp_day(year, month, start_date.day()))
        }
        RecurrenceFrequency::Yearly => {
            let year = start_date.year() + nth as i32;
            let month = start_date.month();
            NaiveDate::from_ymd(year, month, clamp_day(year, month, start_date.day()))
        }
    };

    start
        .timezone()
        .ymd(date.year(), date.month(), date.day())
        .and_hms_milli(
            start.hour(),
            start.minute(),
            start.second(),
            start.timestamp_subsec_millis(),
        )
        .timestamp_millis()
}
