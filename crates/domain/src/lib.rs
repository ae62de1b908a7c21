mod calendar;
mod calendar_item;
mod calendar_view;
mod countdown;
pub mod date;
mod event;
mod event_instance;
mod shared;
mod todo;

pub use calendar::CalendarSettings;
pub use calendar_item::CalendarItem;
pub use calendar_view::{
    bucket, CalendarCell, CalendarGrid, CalendarView, CellKey, InvalidCalendarViewError,
    MONTH_GRID_CELLS,
};
pub use countdown::{Countdown, CountdownProjection, InvalidCountdownError};
pub use event::TemplateEvent;
pub use event_instance::EventInstance;
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use shared::recurrence::{RecurrenceFrequency, RecurrenceRule, MAX_OCCURRENCES};
pub use todo::{TodoItem, TodoProjection};
