use crate::core::{BaseService, Result, CONTRACT_NAME, REQUIRED_CAPABILITY};
use crate::utils::error::ServiceError;
use std::convert::Infallible;

/// The abstract contract as a type. It has no values, so `new` can only fail
/// and `init` can never run.
#[derive(Debug)]
pub enum AbstractService {}

impl AbstractService {
    pub fn new() -> Result<Self> {
        tracing::warn!("Refusing to instantiate abstract service {}", CONTRACT_NAME);
        Err(Self::refusal(CONTRACT_NAME))
    }

    pub(crate) fn refusal(contract: &str) -> ServiceError {
        ServiceError::AbstractInstantiation {
            contract: contract.to_string(),
            missing: REQUIRED_CAPABILITY.to_string(),
        }
    }
}

impl BaseService for AbstractService {
    type Output = Infallible;

    fn init(&mut self) -> Result<Infallible> {
        match *self {}
    }

    fn name(&self) -> &str {
        CONTRACT_NAME
    }
}
