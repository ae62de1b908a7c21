use crate::error::AlmanacError;
use crate::shared::usecase::UseCase;
use almanac_domain::Countdown;
use almanac_infra::AlmanacContext;

#[derive(Debug)]
pub struct CreateCountdownUseCase {
    pub title: String,
    /// Target month, January -> 1
    pub month: u32,
    pub day: u32,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidTargetDate(u32, u32),
    StorageError,
}

impl From<UseCaseError> for AlmanacError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidTargetDate(month, day) => Self::BadClientData(format!(
                "Countdown target month: {} and day: {} is not a valid date",
                month, day
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

impl UseCase for CreateCountdownUseCase {
    type Response = Countdown;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateCountdown";

    fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        let countdown = Countdown::new(
            &self.title,
            self.month,
            self.day,
            ctx.sys.get_timestamp_millis(),
        )
        .map_err(|_| UseCaseError::InvalidTargetDate(self.month, self.day))?;

        ctx.repos
            .countdowns
            .insert(&countdown)
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(countdown)
    }
}

#[cfg(test)]
mod test {
    use super::*;
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
    fn creates_countdown() {
        let ctx = setup();
        let countdown = CreateCountdownUseCase {
            title: "New Year".into(),
            month: 1,
            day: 1,
        }
        .execute(&ctx)
        .unwrap();

        assert_eq!(ctx.repos.countdowns.list().len(), 1);
        assert_eq!(ctx.repos.countdowns.find(&countdown.id).unwrap().month, 1);
    }

    #[test]
    fn rejects_invalid_target_date() {
        let ctx = setup();
        let mut usecase = CreateCountdownUseCase {
            title: "Nope".into(),
            month: 2,
            day: 30,
        };

        assert_eq!(
            usecase.execute(&ctx).unwrap_err(),
            UseCaseError::InvalidTargetDate(2, 30)
        );
        assert!(ctx.repos.countdowns.list().is_empty());
    }
}
