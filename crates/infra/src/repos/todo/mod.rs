mod inmemory;

use almanac_domain::{TodoItem, ID};
pub use inmemory::InMemoryTodoRepo;

pub trait ITodoRepo: Send + Sync {
    fn insert(&self, todo: &TodoItem) -> anyhow::Result<()>;
    fn save(&self, todo: &TodoItem) -> anyhow::Result<()>;
    fn find(&self, todo_id: &ID) -> Option<TodoItem>;
    fn list(&self) -> Vec<TodoItem>;
    fn delete(&self, todo_id: &ID) -> Option<TodoItem>;
}
