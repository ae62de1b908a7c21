use super::ITodoRepo;
use crate::repos::shared::inmemory_repo::*;
use almanac_domain::{TodoItem, ID};

pub struct InMemoryTodoRepo {
    todos: std::sync::Mutex<Vec<TodoItem>>,
}

impl InMemoryTodoRepo {
    pub fn new() -> Self {
        Self {
            todos: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl ITodoRepo for InMemoryTodoRepo {
    fn insert(&self, todo: &TodoItem) -> anyhow::Result<()> {
        insert(todo, &self.todos);
        Ok(())
    }

    fn save(&self, todo: &TodoItem) -> anyhow::Result<()> {
        save(todo, &self.todos);
        Ok(())
    }

    fn find(&self, todo_id: &ID) -> Option<TodoItem> {
        find(todo_id, &self.todos)
    }

    fn list(&self) -> Vec<TodoItem> {
        all(&self.todos)
    }

    fn delete(&self, todo_id: &ID) -> Option<TodoItem> {
        delete(todo_id, &self.todos)
    }
}
