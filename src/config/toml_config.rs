use crate::services::EchoService;
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub service: ServiceSection,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceSection {
    pub sentinel: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl ServiceConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ServiceError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let config: Self =
            toml::from_str(&processed_content).map_err(|e| ServiceError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        config.validate_config()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${SENTINEL})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ServiceError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(sentinel) = &self.service.sentinel {
            validation::validate_non_empty_string("service.sentinel", sentinel)?;
        }
        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
            }
            if let Some(format) = &logging.format {
                validation::validate_one_of("logging.format", format, &LOG_FORMATS)?;
            }
        }
        Ok(())
    }

    pub fn sentinel(&self) -> Option<&str> {
        self.service.sentinel.as_deref()
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or("info")
    }

    pub fn json_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .is_some_and(|f| f == "json")
    }

    /// Level and JSON flag for the logger. `verbose` forces `debug` but keeps
    /// the configured format.
    pub fn logger_settings(&self, verbose: bool) -> (&str, bool) {
        let level = if verbose { "debug" } else { self.log_level() };
        (level, self.json_logging())
    }

    /// The configured sentinel wins over `fallback`.
    pub fn echo_service(&self, fallback: &str) -> EchoService {
        EchoService::new(self.sentinel().unwrap_or(fallback))
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = ServiceConfig::from_toml_str("").unwrap();
        assert_eq!(config.sentinel(), None);
        assert_eq!(config.log_level(), "info");
        assert!(!config.json_logging());
    }

    #[test]
    fn test_unknown_env_var_left_as_written() {
        let content = r#"
[service]
sentinel = "${BASE_SERVICE_SURELY_UNSET_VAR}"
"#;
        let config = ServiceConfig::from_toml_str(content).unwrap();
        assert_eq!(config.sentinel(), Some("${BASE_SERVICE_SURELY_UNSET_VAR}"));
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        let content = r#"
[logging]
format = "xml"
"#;
        let err = ServiceConfig::from_toml_str(content).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_malformed_toml() {
        let err = ServiceConfig::from_toml_str("[service").unwrap_err();
        assert!(matches!(err, ServiceError::ConfigValidationError { .. }));
    }
}
