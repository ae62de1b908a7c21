use crate::error::AlmanacError;
use crate::shared::usecase::UseCase;
use almanac_domain::{EventInstance, TemplateEvent, ID};
use almanac_infra::AlmanacContext;

#[derive(Debug)]
pub struct GetEventInstancesUseCase {
    pub event_id: ID,
}

#[derive(Debug)]
pub struct GetEventInstancesResponse {
    pub event: TemplateEvent,
    pub instances: Vec<EventInstance>,
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

impl UseCase for GetEventInstancesUseCase {
    type Response = GetEventInstancesResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEventInstances";

    fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        let event = match ctx.repos.events.find(&self.event_id) {
            Some(event) => event,
            None => return Err(UseCaseError::NotFound(self.event_id.clone())),
        };

        let mut instances = ctx.repos.event_instances.find_by_template(&event.id);
        instances.sort_by_key(|instance| instance.occurrence_index);

        Ok(GetEventInstancesResponse { event, instances })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::create_event::CreateEventUseCase;
    use almanac_domain::{RecurrenceFrequency, RecurrenceRule};
    use almanac_infra::{Config, FixedSys, Repos};
    use std::sync::Arc;

    fn setup() -> AlmanacContext {
        AlmanacContext {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(FixedSys(1718445600000)),
        }
    }

    #[test]
    fn returns_stored_instances_in_occurrence_order() {
        let ctx = setup();
        let event = CreateEventUseCase {
            name: "Standup".into(),
            start_ts: Some(1718445600000),
            end_ts: None,
            recurrence: Some(RecurrenceRule {
                freq: RecurrenceFrequency::Daily,
                count: Some(5),
                until: None,
            }),
        }
        .execute(&ctx)
        .unwrap();

        let res = GetEventInstancesUseCase {
            event_id: event.id.clone(),
        }
        .execute(&ctx)
        .unwrap();

        assert_eq!(res.event.id, event.id);
        assert_eq!(res.instances.len(), 5);
        for (i, instance) in res.instances.iter().enumerate() {
            assert_eq!(instance.occurrence_index, i as u32);
        }
    }

    #[test]
    fn rejects_unknown_event() {
        let ctx = setup();
        let mut usecase = GetEventInstancesUseCase {
            event_id: ID::default(),
        };

        assert_eq!(
            usecase.execute(&ctx).unwrap_err(),
            UseCaseError::NotFound(usecase.event_id)
        );
    }
}
