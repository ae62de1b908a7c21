use crate::error::AlmanacError;
use crate::shared::usecase::UseCase;
use almanac_domain::{TodoItem, ID};
use almanac_infra::AlmanacContext;

#[derive(Debug)]
pub struct DeleteTodoUseCase {
    pub todo_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for AlmanacError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(todo_id) => {
                Self::NotFound(format!("The todo with id: {}, was not found.", todo_id))
            }
        }
    }
}

impl UseCase for DeleteTodoUseCase {
    type Response = TodoItem;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteTodo";

    fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.todos.delete(&self.todo_id) {
            Some(todo) => Ok(todo),
            None => Err(UseCaseError::NotFound(self.todo_id.clone())),
        }
    }
}
