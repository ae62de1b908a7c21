use crate::error::AlmanacError;
use crate::shared::usecase::UseCase;
use almanac_domain::{RecurrenceRule, TemplateEvent, ID};
use almanac_infra::AlmanacContext;

/// Replaces the fields of a template event and regenerates its instances.
/// The previous generation is discarded wholesale, never patched in place.
#[derive(Debug)]
pub struct UpdateEventUseCase {
    pub event_id: ID,
    pub name: String,
    pub start_ts: Option<i64>,
    pub end_ts: Option<i64>,
    pub recurrence: Option<RecurrenceRule>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    MissingStartTime,
    InvalidTimespan,
    InvalidRecurrenceRule,
    StorageError,
}

impl From<UseCaseError> for AlmanacError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => {
                Self::NotFound(format!("The event with id: {}, was not found.", event_id))
            }
            UseCaseError::MissingStartTime => Self::BadClientData(
                "An event with an end time or a recurrence rule must have a start time".into(),
            ),
            UseCaseError::InvalidTimespan => {
                Self::BadClientData("The provided start and end time is invalid".into())
            }
            UseCaseError::InvalidRecurrenceRule => {
                Self::BadClientData("Invalid recurrence rule specified for the event".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

impl UseCase for UpdateEventUseCase {
    type Response = TemplateEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateEvent";

    fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        let mut event = match ctx.repos.events.find(&self.event_id) {
            Some(event) => event,
            None => return Err(UseCaseError::NotFound(self.event_id.clone())),
        };

        if self.start_ts.is_none() && (self.end_ts.is_some() || self.recurrence.is_some()) {
            return Err(UseCaseError::MissingStartTime);
        }
        if let (Some(start_ts), Some(end_ts)) = (self.start_ts, self.end_ts) {
            if end_ts <= start_ts {
                return Err(UseCaseError::InvalidTimespan);
            }
        }

        event.name = self.name.clone();
        event.start_ts = self.start_ts;
        event.end_ts = self.end_ts;
        event.recurrence = None;
        if let Some(rule) = self.recurrence.clone() {
            if !event.set_recurrence(rule) {
                return Err(UseCaseError::InvalidRecurrenceRule);
            }
        }
        event.updated = ctx.sys.get_timestamp_millis();

        let instances = event.expand(event.updated, &ctx.config.calendar_settings());

        ctx.repos
            .events
            .save(&event)
            .map_err(|_| UseCaseError::StorageError)?;
        ctx.repos.event_instances.delete_by_template(&event.id);
        ctx.repos
            .event_instances
            .save_instances(&instances)
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(event)
    }
}
