mod countdown;
mod event;
mod event_instance;
mod shared;
mod todo;

use countdown::InMemoryCountdownRepo;
pub use countdown::ICountdownRepo;
use event::InMemoryTemplateEventRepo;
pub use event::ITemplateEventRepo;
use event_instance::InMemoryEventInstanceRepo;
pub use event_instance::IEventInstanceRepo;
pub use shared::repo::DeleteResult;
use std::sync::Arc;
use todo::InMemoryTodoRepo;
pub use todo::ITodoRepo;

#[derive(Clone)]
pub struct Repos {
    pub events: Arc<dyn ITemplateEventRepo>,
    pub event_instances: Arc<dyn IEventInstanceRepo>,
    pub countdowns: Arc<dyn ICountdownRepo>,
    pub todos: Arc<dyn ITodoRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            events: Arc::new(InMemoryTemplateEventRepo::new()),
            event_instances: Arc::new(InMemoryEventInstanceRepo::new()),
            countdowns: Arc::new(InMemoryCountdownRepo::new()),
            todos: Arc::new(InMemoryTodoRepo::new()),
        }
    }
}
