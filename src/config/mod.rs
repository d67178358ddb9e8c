pub mod toml_config;

#[cfg(feature = "cli")]
use crate::services::DEFAULT_SENTINEL;
#[cfg(feature = "cli")]
use crate::utils::{error::Result, validation};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "base-service")]
#[command(about = "Initialize a service through the BaseService contract")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML service configuration")]
    pub config: Option<String>,

    #[arg(long, default_value = DEFAULT_SENTINEL)]
    pub sentinel: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Print the init report as JSON")]
    pub json: bool,
}

#[cfg(feature = "cli")]
impl validation::Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        validation::validate_non_empty_string("sentinel", &self.sentinel)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    #[test]
    fn test_parse_defaults() {
        let config = CliConfig::parse_from(["base-service"]);
        assert_eq!(config.sentinel, DEFAULT_SENTINEL);
        assert!(config.config.is_none());
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_sentinel_rejected() {
        let config = CliConfig::parse_from(["base-service", "--sentinel", "  "]);
        assert!(config.validate().is_err());
    }
}
