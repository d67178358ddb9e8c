pub mod abstract_service;
pub mod definition;
pub mod runner;

pub use crate::domain::model::InitReport;
pub use crate::domain::ports::{BaseService, CONTRACT_NAME, REQUIRED_CAPABILITY};
pub use crate::utils::error::Result;
