use crate::error::AlmanacError;
use crate::shared::usecase::UseCase;
use almanac_domain::{bucket, date, CalendarGrid, CalendarItem, CalendarView};
use almanac_infra::AlmanacContext;
use chrono::prelude::*;

/// Assembles the grid for one calendar view: stored event instances in the
/// visible window plus countdown and to-do projections, bucketed per cell.
#[derive(Debug)]
pub struct GetCalendarViewUseCase {
    pub view: CalendarView,
    /// Anchor date of the view, `YYYY-M-D`
    pub date: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidDate(String),
}

impl From<UseCaseError> for AlmanacError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidDate(date) => Self::BadClientData(format!(
                "Invalid datetime: {}. Should be YYYY-MM-DD, e.g. January 1. 2020 => 2020-1-1",
                date
            )),
        }
    }
}

impl UseCase for GetCalendarViewUseCase {
    type Response = CalendarGrid;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCalendarView";

    fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        let (year, month, day) = date::is_valid_date(&self.date)
            .map_err(|_| UseCaseError::InvalidDate(self.date.clone()))?;
        let anchor_date = NaiveDate::from_ymd(year, month, day);

        let settings = ctx.config.calendar_settings();
        let tz = settings.timezone;
        let now = ctx.sys.get_timestamp_millis();
        let today = date::date_of_timestamp(now, &tz);

        let (window_start, window_end) = self.view.date_window(anchor_date);
        let window_start_ts = tz
            .ymd(window_start.year(), window_start.month(), window_start.day())
            .and_hms(0, 0, 0)
            .timestamp_millis();
        let window_end_ts = tz
            .ymd(window_end.year(), window_end.month(), window_end.day())
            .and_hms(0, 0, 0)
            .timestamp_millis()
            + 1000 * 60 * 60 * 24;

        let mut items = ctx
            .repos
            .event_instances
            .find_in_span(window_start_ts, window_end_ts)
            .into_iter()
            .map(CalendarItem::Event)
            .collect::<Vec<_>>();

        for countdown in ctx.repos.countdowns.list() {
            items.push(CalendarItem::Countdown(countdown.project(now, &settings)));
        }
        for todo in ctx.repos.todos.list() {
            items.push(CalendarItem::Todo(todo.project(now, &settings)));
        }

        Ok(bucket(self.view, anchor_date, today, items, &settings))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::countdown::create_countdown::CreateCountdownUseCase;
    use crate::event::create_event::CreateEventUseCase;
    use crate::todo::create_todo::CreateTodoUseCase;
    use almanac_domain::{CellKey, RecurrenceFrequency, RecurrenceRule, MONTH_GRID_CELLS};
    use almanac_infra::{Config, FixedSys, Repos};
    use chrono_tz::UTC;
    use std::sync::Arc;

    fn ts(year: i32, month: u32, day: u32, hour: u32) -> i64 {
        UTC.ymd(year, month, day).and_hms(hour, 0, 0).timestamp_millis()
    }

    // "Today" is pinned to 2024-06-15T10:00:00Z
    fn setup() -> AlmanacContext {
        AlmanacContext {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(FixedSys(ts(2024, 6, 15, 10))),
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd(year, month, day)
    }

    #[test]
    fn rejects_invalid_anchor_date() {
        let ctx = setup();
        let mut usecase = GetCalendarViewUseCase {
            view: CalendarView::Month,
            date: "2024-13-1".into(),
        };

        let err = usecase.execute(&ctx).unwrap_err();
        assert_eq!(err, UseCaseError::InvalidDate("2024-13-1".into()));
        assert!(matches!(
            AlmanacError::from(err),
            AlmanacError::BadClientData(_)
        ));
    }

    #[test]
    fn month_view_places_recurring_instances_per_day() {
        let ctx = setup();
        CreateEventUseCase {
            name: "Standup".into(),
            start_ts: Some(ts(2024, 6, 1, 9)),
            end_ts: Some(ts(2024, 6, 1, 10)),
            recurrence: Some(RecurrenceRule {
                freq: RecurrenceFrequency::Daily,
                count: Some(30),
                until: None,
            }),
        }
        .execute(&ctx)
        .unwrap();

        let grid = GetCalendarViewUseCase {
            view: CalendarView::Month,
            date: "2024-6-15".into(),
        }
        .execute(&ctx)
        .unwrap();

        assert_eq!(grid.cells.len(), MONTH_GRID_CELLS);
        for cell in grid.cells.iter().filter(|cell| !cell.is_padding) {
            assert_eq!(cell.items.len(), 1);
        }
        for cell in grid.cells.iter().filter(|cell| cell.is_padding) {
            assert!(cell.items.is_empty());
        }
    }

    #[test]
    fn week_view_includes_floating_todos_on_today() {
        let ctx = setup();
        CreateTodoUseCase {
            title: "Clean desk".into(),
            due_ts: None,
        }
        .execute(&ctx)
        .unwrap();

        let grid = GetCalendarViewUseCase {
            view: CalendarView::Week,
            date: "2024-6-12".into(),
        }
        .execute(&ctx)
        .unwrap();

        assert_eq!(grid.cells.len(), 7);
        let today_cell = grid.cell(&CellKey::Date(date(2024, 6, 15))).unwrap();
        assert_eq!(today_cell.items.len(), 1);
    }

    #[test]
    fn countdown_is_placed_on_its_target_date() {
        let ctx = setup();
        CreateCountdownUseCase {
            title: "Midsummer".into(),
            month: 6,
            day: 21,
        }
        .execute(&ctx)
        .unwrap();

        let grid = GetCalendarViewUseCase {
            view: CalendarView::Month,
            date: "2024-6-15".into(),
        }
        .execute(&ctx)
        .unwrap();

        let cell = grid.cell(&CellKey::Date(date(2024, 6, 21))).unwrap();
        assert_eq!(cell.items.len(), 1);
        match &cell.items[0] {
            CalendarItem::Countdown(projection) => assert_eq!(projection.days_left, 6),
            _ => panic!("expected countdown"),
        }
    }

    #[test]
    fn year_view_only_aggregates_the_anchor_year() {
        let ctx = setup();
        CreateEventUseCase {
            name: "Yearly review".into(),
            start_ts: Some(ts(2024, 3, 15, 12)),
            end_ts: None,
            recurrence: Some(RecurrenceRule {
                freq: RecurrenceFrequency::Yearly,
                count: Some(3),
                until: None,
            }),
        }
        .execute(&ctx)
        .unwrap();

        let grid = GetCalendarViewUseCase {
            view: CalendarView::Year,
            date: "2025-1-1".into(),
        }
        .execute(&ctx)
        .unwrap();

        assert_eq!(grid.cells.len(), 12);
        let march = grid
            .cell(&CellKey::Month {
                year: 2025,
                month: 3,
            })
            .unwrap();
        assert_eq!(march.items.len(), 1);
        for cell in &grid.cells {
            if cell.key != march.key {
                assert!(cell.items.is_empty());
            }
        }
    }

    #[test]
    fn day_view_orders_dated_before_undated() {
        let ctx = setup();
        CreateTodoUseCase {
            title: "Clean desk".into(),
            due_ts: None,
        }
        .execute(&ctx)
        .unwrap();
        CreateEventUseCase {
            name: "Dentist".into(),
            start_ts: Some(ts(2024, 6, 15, 9)),
            end_ts: None,
            recurrence: None,
        }
        .execute(&ctx)
        .unwrap();

        let grid = GetCalendarViewUseCase {
            view: CalendarView::Day,
            date: "2024-6-15".into(),
        }
        .execute(&ctx)
        .unwrap();

        assert_eq!(grid.cells.len(), 1);
        let cell = &grid.cells[0];
        assert_eq!(cell.items.len(), 2);
        assert!(matches!(cell.items[0], CalendarItem::Event(_)));
        assert!(matches!(cell.items[1], CalendarItem::Todo(_)));
    }
}
