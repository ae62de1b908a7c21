use crate::error::AlmanacError;
use crate::shared::usecase::UseCase;
use almanac_domain::TodoItem;
use almanac_infra::AlmanacContext;

#[derive(Debug)]
pub struct CreateTodoUseCase {
    pub title: String,
    /// Absent due date makes the item float to the current day
    pub due_ts: Option<i64>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for AlmanacError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

impl UseCase for CreateTodoUseCase {
    type Response = TodoItem;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateTodo";

    fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        let todo = TodoItem::new(&self.title, self.due_ts, ctx.sys.get_timestamp_millis());

        ctx.repos
            .todos
            .insert(&todo)
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(todo)
    }
}
