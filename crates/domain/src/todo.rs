use crate::calendar::CalendarSettings;
use crate::date::date_of_timestamp;
use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: ID,
    pub title: String,
    /// Absent due date means the item floats to the current day
    pub due_ts: Option<i64>,
    pub done: bool,
    pub created: i64,
}

impl TodoItem {
    pub fn new(title: &str, due_ts: Option<i64>, created: i64) -> Self {
        Self {
            id: Default::default(),
            title: title.to_string(),
            due_ts,
            done: false,
            created,
        }
    }

    /// Projects this item onto the calendar as seen from `today_ts`.
    /// `days_left` is negative for overdue items and absent for undated ones.
    pub fn project(&self, today_ts: i64, settings: &CalendarSettings) -> TodoProjection {
        let tz = settings.timezone;
        let days_left = self.due_ts.map(|due_ts| {
            (date_of_timestamp(due_ts, &tz) - date_of_timestamp(today_ts, &tz)).num_days()
        });

        TodoProjection {
            id: self.id.clone(),
            title: self.title.clone(),
            due_ts: self.due_ts,
            days_left,
            done: self.done,
        }
    }
}

impl Entity for TodoItem {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Read-only projection of a `TodoItem` into event shape, recomputed on
/// every load and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoProjection {
    pub id: ID,
    pub title: String,
    pub due_ts: Option<i64>,
    pub days_left: Option<i64>,
    pub done: bool,
}
