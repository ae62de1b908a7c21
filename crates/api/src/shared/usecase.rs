use almanac_infra::AlmanacContext;
use std::fmt::Debug;
use tracing::error;

pub trait UseCase: Debug {
    type Response;
    type Error;

    const NAME: &'static str;

    fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error>;
}

#[tracing::instrument(name = "Executing usecase", skip(usecase, ctx))]
pub fn execute<U>(mut usecase: U, ctx: &AlmanacContext) -> Result<U::Response, U::Error>
where
    U: UseCase,
    U::Error: Debug,
{
    let res = usecase.execute(ctx);

    if let Err(e) = &res {
        error!("Use case {} error: {:?}", U::NAME, e);
    }

    res
}
