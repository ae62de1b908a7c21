use crate::error::AlmanacError;
use crate::shared::usecase::UseCase;
use almanac_domain::{RecurrenceRule, TemplateEvent};
use almanac_infra::AlmanacContext;

/// Persists a new template event and materializes its instances.
#[derive(Debug)]
pub struct CreateEventUseCase {
    pub name: String,
    pub start_ts: Option<i64>,
    pub end_ts: Option<i64>,
    pub recurrence: Option<RecurrenceRule>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MissingStartTime,
    InvalidTimespan,
    InvalidRecurrenceRule,
    StorageError,
}

impl From<UseCaseError> for AlmanacError {
    fn from(e: UseCaseError) -> Self {
        match e {
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

impl UseCase for CreateEventUseCase {
    type Response = TemplateEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEvent";

    fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        if self.start_ts.is_none() && (self.end_ts.is_some() || self.recurrence.is_some()) {
            return Err(UseCaseError::MissingStartTime);
        }
        if let (Some(start_ts), Some(end_ts)) = (self.start_ts, self.end_ts) {
            if end_ts <= start_ts {
                return Err(UseCaseError::InvalidTimespan);
            }
        }

        let now = ctx.sys.get_timestamp_millis();
        let mut event = TemplateEvent {
            id: Default::default(),
            name: self.name.clone(),
            start_ts: self.start_ts,
            end_ts: self.end_ts,
            recurrence: None,
            created: now,
            updated: now,
        };

        if let Some(rule) = self.recurrence.clone() {
            if !event.set_recurrence(rule) {
                return Err(UseCaseError::InvalidRecurrenceRule);
            }
        }

        let instances = event.expand(now, &ctx.config.calendar_settings());

        ctx.repos
            .events
            .insert(&event)
            .map_err(|_| UseCaseError::StorageError)?;
        ctx.repos
            .event_instances
            .save_instances(&instances)
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(event)
    }
}
