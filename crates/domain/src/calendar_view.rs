use crate::calendar::CalendarSettings;
use crate::calendar_item::CalendarItem;
use crate::date::date_of_timestamp;
use chrono::prelude::*;
use chrono::Duration;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// The month view is a fixed 5x7 grid. A month that would need a sixth
/// row (31 days starting on a Sunday) has its trailing days truncated,
/// which is a known limitation kept for parity with the view it renders.
pub const MONTH_GRID_CELLS: usize = 35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Day,
    Week,
    Month,
    Year,
}

impl CalendarView {
    /// First and last calendar date covered by this view around
    /// `anchor_date`. Callers use this to pre-filter items before bucketing.
    pub fn date_window(&self, anchor_date: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            CalendarView::Day => (anchor_date, anchor_date),
            CalendarView::Week => {
                let monday = monday_of_week(anchor_date);
                (monday, monday + Duration::days(6))
            }
            CalendarView::Month => {
                let start = month_grid_start(anchor_date);
                (start, start + Duration::days(MONTH_GRID_CELLS as i64 - 1))
            }
            CalendarView::Year => (
                NaiveDate::from_ymd(anchor_date.year(), 1, 1),
                NaiveDate::from_ymd(anchor_date.year(), 12, 31),
            ),
        }
    }
}

impl Display for CalendarView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let view = match self {
            CalendarView::Day => "day",
            CalendarView::Week => "week",
            CalendarView::Month => "month",
            CalendarView::Year => "year",
        };
        write!(f, "{}", view)
    }
}

#[derive(Error, Debug)]
pub enum InvalidCalendarViewError {
    #[error("Invalid calendar view specified: {0}")]
    InvalidViewIdentifier(String),
}

impl FromStr for CalendarView {
    type Err = InvalidCalendarViewError;

    fn from_str(view: &str) -> Result<Self, Self::Err> {
        match view.to_lowercase().as_str() {
            "day" => Ok(CalendarView::Day),
            "week" => Ok(CalendarView::Week),
            "month" => Ok(CalendarView::Month),
            "year" => Ok(CalendarView::Year),
            _ => Err(InvalidCalendarViewError::InvalidViewIdentifier(
                view.to_string(),
            )),
        }
    }
}

/// Address of one slot in the visible grid
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CellKey {
    Date(NaiveDate),
    Month { year: i32, month: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub key: CellKey,
    /// Month view cells that belong to the previous or next month. They
    /// are rendered dimmed but still receive items for their real date.
    pub is_padding: bool,
    pub items: Vec<CalendarItem>,
}

impl CalendarCell {
    fn new(key: CellKey, is_padding: bool) -> Self {
        Self {
            key,
            is_padding,
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarGrid {
    pub view: CalendarView,
    pub cells: Vec<CalendarCell>,
}

impl CalendarGrid {
    pub fn cell(&self, key: &CellKey) -> Option<&CalendarCell> {
        self.cells.iter().find(|cell| cell.key == *key)
    }
}

/// Assigns every item to the cell of the grid it belongs in.
///
/// Dated items go to the cell matching their calendar date (their
/// `(year, month)` in the year view). Undated items go to `today`'s cell
/// and are excluded from the year view entirely. Items dated outside the
/// visible window are dropped. Within a cell, items are ordered by start
/// timestamp ascending, undated items last, ties in insertion order.
pub fn bucket(
    view: CalendarView,
    anchor_date: NaiveDate,
    today: NaiveDate,
    items: Vec<CalendarItem>,
    settings: &CalendarSettings,
) -> CalendarGrid {
    let mut cells = enumerate_cells(view, anchor_date);

    // One stable sort up front keeps every cell ordered as items are pushed
    let items = items.into_iter().sorted_by(compare_start_ts);
    for item in items {
        let key = match (item.start_ts(), view) {
            (Some(start_ts), CalendarView::Year) => {
                let date = date_of_timestamp(start_ts, &settings.timezone);
                CellKey::Month {
                    year: date.year(),
                    month: date.month(),
                }
            }
            (Some(start_ts), _) => CellKey::Date(date_of_timestamp(start_ts, &settings.timezone)),
            // Undated items have no month to attach to at year granularity
            (None, CalendarView::Year) => continue,
            (None, _) => CellKey::Date(today),
        };

        if let Some(cell) = cells.iter_mut().find(|cell| cell.key == key) {
            cell.items.push(item);
        }
    }

    CalendarGrid { view, cells }
}

fn enumerate_cells(view: CalendarView, anchor_date: NaiveDate) -> Vec<CalendarCell> {
    match view {
        CalendarView::Day => vec![CalendarCell::new(CellKey::Date(anchor_date), false)],
        CalendarView::Week => {
            let monday = monday_of_week(anchor_date);
            (0..7)
                .map(|offset| {
                    CalendarCell::new(CellKey::Date(monday + Duration::days(offset)), false)
                })
                .collect()
        }
        CalendarView::Month => {
            let grid_start = month_grid_start(anchor_date);
            (0..MONTH_GRID_CELLS as i64)
                .map(|offset| {
                    let date = grid_start + Duration::days(offset);
                    let in_month = date.year() == anchor_date.year()
                        && date.month() == anchor_date.month();
                    CalendarCell::new(CellKey::Date(date), !in_month)
                })
                .collect()
        }
        CalendarView::Year => (1..=12)
            .map(|month| {
                CalendarCell::new(
                    CellKey::Month {
                        year: anchor_date.year(),
                        month,
                    },
                    false,
                )
            })
            .collect(),
    }
}

/// Most recent Monday, where Sunday counts as the last day of the week
fn monday_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn month_grid_start(anchor_date: NaiveDate) -> NaiveDate {
    let first_of_month = NaiveDate::from_ymd(anchor_date.year(), anchor_date.month(), 1);
    monday_of_week(first_of_month)
}

fn compare_start_ts(a: &CalendarItem, b: &CalendarItem) -> Ordering {
    match (a.start_ts(), b.start_ts()) {
        (Some(a_ts), Some(b_ts)) => a_ts.cmp(&b_ts),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
