use crate::error::AlmanacError;
use crate::shared::usecase::UseCase;
use almanac_domain::{TemplateEvent, ID};
use almanac_infra::AlmanacContext;

/// Deletes a template event together with every instance it produced.
#[derive(Debug)]
pub struct DeleteEventUseCase {
    pub event_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for AlmanacError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => {
                Self::NotFound(format!("The event with id: {}, was not found.", event_id))
            }
        }
    }
}

impl UseCase for DeleteEventUseCase {
    type Response = TemplateEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteEvent";

    fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        let event = match ctx.repos.events.delete(&self.event_id) {
            Some(event) => event,
            None => return Err(UseCaseError::NotFound(self.event_id.clone())),
        };

        ctx.repos.event_instances.delete_by_template(&event.id);

        Ok(event)
    }
}
