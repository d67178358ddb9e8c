pub mod config;
pub mod core;
pub mod domain;
pub mod services;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::ServiceConfig;
pub use crate::core::{
    abstract_service::AbstractService,
    definition::{DefinedService, ServiceDefinition},
    runner::ServiceRunner,
};
pub use domain::{
    model::InitReport,
    ports::{BaseService, CONTRACT_NAME, REQUIRED_CAPABILITY},
};
pub use services::EchoService;
pub use utils::error::{Result, ServiceError};
