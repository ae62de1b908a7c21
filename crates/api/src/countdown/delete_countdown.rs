use crate::error::AlmanacError;
use crate::shared::usecase::UseCase;
use almanac_domain::{Countdown, ID};
use almanac_infra::AlmanacContext;

#[derive(Debug)]
pub struct DeleteCountdownUseCase {
    pub countdown_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for AlmanacError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(countdown_id) => Self::NotFound(format!(
                "The countdown with id: {}, was not found.",
                countdown_id
            )),
        }
    }
}

impl UseCase for DeleteCountdownUseCase {
    type Response = Countdown;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteCountdown";

    fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.countdowns.delete(&self.countdown_id) {
            Some(countdown) => Ok(countdown),
            None => Err(UseCaseError::NotFound(self.countdown_id.clone())),
        }
    }
}
