mod calendar;
mod countdown;
mod error;
mod event;
mod shared;
mod todo;

pub use calendar::get_calendar_view::GetCalendarViewUseCase;
pub use countdown::create_countdown::CreateCountdownUseCase;
pub use countdown::delete_countdown::DeleteCountdownUseCase;
pub use error::AlmanacError;
pub use event::create_event::CreateEventUseCase;
pub use event::delete_event::DeleteEventUseCase;
pub use event::get_event_instances::{GetEventInstancesResponse, GetEventInstancesUseCase};
pub use event::update_event::UpdateEventUseCase;
pub use shared::usecase::{execute, UseCase};
pub use todo::create_todo::CreateTodoUseCase;
pub use todo::delete_todo::DeleteTodoUseCase;
pub use todo::set_todo_done::SetTodoDoneUseCase;
