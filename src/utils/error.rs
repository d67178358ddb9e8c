use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Cannot instantiate abstract service `{contract}`: required operation `{missing}` is not implemented")]
    AbstractInstantiation { contract: String, missing: String },

    #[error("Service `{service}` does not implement required operation `{capability}`")]
    MissingCapability { service: String, capability: String },

    #[error("Service `{service}` failed to initialize: {message}")]
    InitFailed { service: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Contract,
    Initialization,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    // 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ServiceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ServiceError::AbstractInstantiation { .. } | ServiceError::MissingCapability { .. } => {
                ErrorCategory::Contract
            }
            ServiceError::InitFailed { .. } => ErrorCategory::Initialization,
            ServiceError::ConfigError { .. }
            | ServiceError::InvalidConfigValueError { .. }
            | ServiceError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            ServiceError::IoError(_) | ServiceError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 合約錯誤是程式錯誤，無法在執行期恢復
            ErrorCategory::Contract => ErrorSeverity::Critical,
            ErrorCategory::Initialization => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ServiceError::AbstractInstantiation { contract, missing } => format!(
                "Construct a concrete service that implements `{}` instead of `{}` itself",
                missing, contract
            ),
            ServiceError::MissingCapability { capability, .. } => {
                format!("Provide an implementation of `{}` before instantiating", capability)
            }
            ServiceError::InitFailed { .. } => {
                "Check the service's dependencies and retry initialization".to_string()
            }
            ServiceError::ConfigError { .. } | ServiceError::ConfigValidationError { .. } => {
                "Check the configuration file syntax and values".to_string()
            }
            ServiceError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of `{}`", field)
            }
            ServiceError::IoError(_) => "Check file paths and permissions".to_string(),
            ServiceError::SerializationError(_) => {
                "Ensure the service output can be serialized".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Contract => format!("Service contract violated: {}", self),
            ErrorCategory::Initialization => format!("Initialization failed: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abstract_instantiation_names_missing_operation() {
        let err = ServiceError::AbstractInstantiation {
            contract: "BaseService".to_string(),
            missing: "init".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("BaseService"));
        assert!(message.contains("`init`"));
        assert_eq!(err.category(), ErrorCategory::Contract);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_missing_capability_suggestion() {
        let err = ServiceError::MissingCapability {
            service: "Incomplete".to_string(),
            capability: "init".to_string(),
        };

        assert!(err.recovery_suggestion().contains("`init`"));
        assert!(err.user_friendly_message().starts_with("Service contract violated"));
    }

    #[test]
    fn test_exit_codes_by_severity() {
        assert_eq!(ErrorSeverity::Low.exit_code(), 0);
        assert_eq!(ErrorSeverity::Medium.exit_code(), 2);
        assert_eq!(ErrorSeverity::High.exit_code(), 1);
        assert_eq!(ErrorSeverity::Critical.exit_code(), 3);
    }

    #[test]
    fn test_exit_codes_by_error() {
        let init_failed = ServiceError::InitFailed {
            service: "EchoService".to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(init_failed.severity().exit_code(), 2);

        let config_errors = [
            ServiceError::ConfigError {
                message: "bad".to_string(),
            },
            ServiceError::InvalidConfigValueError {
                field: "service.sentinel".to_string(),
                value: " ".to_string(),
                reason: "blank".to_string(),
            },
            ServiceError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: "bad".to_string(),
            },
        ];
        for err in &config_errors {
            assert_eq!(err.severity().exit_code(), 1, "{}", err);
        }

        let missing = ServiceError::MissingCapability {
            service: "Incomplete".to_string(),
            capability: "init".to_string(),
        };
        assert_eq!(missing.severity().exit_code(), 3);
    }

    #[test]
    fn test_io_error_is_system_category() {
        let err: ServiceError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category(), ErrorCategory::System);
    }
}
