use crate::error::AlmanacError;
use crate::shared::usecase::UseCase;
use almanac_domain::{TodoItem, ID};
use almanac_infra::AlmanacContext;

#[derive(Debug)]
pub struct SetTodoDoneUseCase {
    pub todo_id: ID,
    pub done: bool,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for AlmanacError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(todo_id) => {
                Self::NotFound(format!("The todo with id: {}, was not found.", todo_id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

impl UseCase for SetTodoDoneUseCase {
    type Response = TodoItem;

    type Error = UseCaseError;

    const NAME: &'static str = "SetTodoDone";

    fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        let mut todo = match ctx.repos.todos.find(&self.todo_id) {
            Some(todo) => todo,
            None => return Err(UseCaseError::NotFound(self.todo_id.clone())),
        };

        todo.done = self.done;
        ctx.repos
            .todos
            .save(&todo)
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(todo)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::todo::create_todo::CreateTodoUseCase;
    use almanac_infra::{Config, FixedSys, Repos};
    use std::sync::Arc;

    fn setup() -> AlmanacContext {
        AlmanacContext {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(FixedSys(0)),
        }
    }

    #[test]
    fn toggles_done_flag() {
        let ctx = setup();
        let todo = CreateTodoUseCase {
            title: "Pay rent".into(),
            due_ts: None,
        }
        .execute(&ctx)
        .unwrap();

        SetTodoDoneUseCase {
            todo_id: todo.id.clone(),
            done: true,
        }
        .execute(&ctx)
        .unwrap();
        assert!(ctx.repos.todos.find(&todo.id).unwrap().done);

        SetTodoDoneUseCase {
            todo_id: todo.id.clone(),
            done: false,
        }
        .execute(&ctx)
        .unwrap();
        assert!(!ctx.repos.todos.find(&todo.id).unwrap().done);
    }

    #[test]
    fn rejects_unknown_todo() {
        let ctx = setup();
        let mut usecase = SetTodoDoneUseCase {
            todo_id: ID::default(),
            done: true,
        };

        assert_eq!(
            usecase.execute(&ctx).unwrap_err(),
            UseCaseError::NotFound(usecase.todo_id)
        );
    }
}
