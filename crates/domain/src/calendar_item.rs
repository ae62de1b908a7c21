use crate::countdown::CountdownProjection;
use crate::event_instance::EventInstance;
use crate::todo::TodoProjection;
use serde::Serialize;

/// Anything that can occupy a calendar cell.
///
/// Countdowns and to-do items are projected into the same shape as event
/// occurrences so the bucketer can place all three uniformly, but they stay
/// distinguishable for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum CalendarItem {
    Event(EventInstance),
    Countdown(CountdownProjection),
    Todo(TodoProjection),
}

impl CalendarItem {
    /// Start timestamp used for placement and ordering. `None` marks an
    /// undated item, which floats to the current day and sorts last.
    pub fn start_ts(&self) -> Option<i64> {
        match self {
            CalendarItem::Event(instance) => Some(instance.start_ts),
            CalendarItem::Countdown(countdown) => Some(countdown.target_ts),
            CalendarItem::Todo(todo) => todo.due_ts,
        }
    }
}
