use std::fmt;
use thiserror::Error;

/// Divisors the derivation guards against independently of validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Divisor {
    WorkableHours,
    NumberOfAssets,
    HoursForProject,
}

impl fmt::Display for Divisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Divisor::WorkableHours => "Workable hours",
            Divisor::NumberOfAssets => "Number of assets",
            Divisor::HoursForProject => "Hours for project",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("{message}")]
    ValidationError { field: String, message: String },

    #[error("Division by zero: {divisor} cannot be zero")]
    DivisionByZero { divisor: Divisor },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Cannot read config file '{path}': {source}")]
    ConfigReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write report to '{path}': {source}")]
    OutputWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
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

impl PricingError {
    pub fn validation(field: &str, message: &str) -> Self {
        PricingError::ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PricingError::ValidationError { .. } => ErrorCategory::Input,
            PricingError::DivisionByZero { .. } => ErrorCategory::Arithmetic,
            PricingError::ConfigError { .. }
            | PricingError::ConfigReadError { .. }
            | PricingError::ConfigValidationError { .. }
            | PricingError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PricingError::OutputWriteError { .. }
            | PricingError::IoError(_)
            | PricingError::SerializationError(_)
            | PricingError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Arithmetic => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit status: 1 for input or configuration problems, 2 for
    /// arithmetic failures, 3 for system errors.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => 1,
            ErrorCategory::Arithmetic => 2,
            ErrorCategory::System => 3,
        }
    }

    /// Message suitable for showing to the person who typed the inputs.
    pub fn user_friendly_message(&self) -> String {
        match self {
            PricingError::ValidationError { message, .. } => message.clone(),
            PricingError::DivisionByZero { divisor } => {
                format!("Cannot calculate: {} is zero", divisor.to_string().to_lowercase())
            }
            PricingError::ConfigError { message } => format!("Configuration problem: {}", message),
            PricingError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            PricingError::InvalidConfigValueError { field, reason, .. } => {
                format!("'{}' is not usable: {}", field, reason)
            }
            PricingError::ConfigReadError { path, source } => {
                format!("Cannot read config file '{}': {}", path, source)
            }
            PricingError::OutputWriteError { path, source } => {
                format!("Cannot write report to '{}': {}", path, source)
            }
            PricingError::IoError(e) => format!("File access failed: {}", e),
            PricingError::SerializationError(e) => format!("Could not serialize result: {}", e),
            PricingError::CsvError(e) => format!("Could not write CSV: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PricingError::ValidationError { .. } => {
                "Correct the highlighted input and run the calculation again"
            }
            PricingError::DivisionByZero { divisor } => match divisor {
                Divisor::WorkableHours => "Set hours per week and weeks per year above zero",
                Divisor::NumberOfAssets => "Set the number of assets to at least 1",
                Divisor::HoursForProject => "Set hours for project above zero",
            },
            PricingError::ConfigError { .. } | PricingError::ConfigValidationError { .. } => {
                "Check that the config file exists and is valid TOML"
            }
            PricingError::InvalidConfigValueError { .. } => {
                "Use a finite number for every pricing field"
            }
            PricingError::ConfigReadError { .. } => {
                "Check the --config path; the file must exist and be readable"
            }
            PricingError::OutputWriteError { .. } => "Check the output path and its permissions",
            PricingError::IoError(_) => "Check file paths and permissions",
            PricingError::SerializationError(_) | PricingError::CsvError(_) => {
                "Try a different output format"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_displays_bare_message() {
        let err = PricingError::validation("hours_per_week", "Hours per week must be greater than 0");
        assert_eq!(err.to_string(), "Hours per week must be greater than 0");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_division_by_zero_names_divisor() {
        let err = PricingError::DivisionByZero {
            divisor: Divisor::NumberOfAssets,
        };
        assert_eq!(
            err.to_string(),
            "Division by zero: Number of assets cannot be zero"
        );
        assert_eq!(err.category(), ErrorCategory::Arithmetic);
        assert_eq!(err.user_friendly_message(), "Cannot calculate: number of assets is zero");
        assert_eq!(
            err.recovery_suggestion(),
            "Set the number of assets to at least 1"
        );
    }

    #[test]
    fn test_exit_codes_by_category() {
        let validation = PricingError::validation("hours_per_week", "Hours per week must be greater than 0");
        assert_eq!(validation.exit_code(), 1);

        let config = PricingError::InvalidConfigValueError {
            field: "inputs.hours_per_week".to_string(),
            value: "NaN".to_string(),
            reason: "Value must be a finite number".to_string(),
        };
        assert_eq!(config.exit_code(), 1);

        let arithmetic = PricingError::DivisionByZero {
            divisor: Divisor::WorkableHours,
        };
        assert_eq!(arithmetic.exit_code(), 2);

        let write = PricingError::OutputWriteError {
            path: "/".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::IsADirectory, "is a directory"),
        };
        assert_eq!(write.exit_code(), 3);
        assert_eq!(
            write.recovery_suggestion(),
            "Check the output path and its permissions"
        );
    }

    #[test]
    fn test_missing_config_file_gets_config_hint() {
        let err = PricingError::ConfigReadError {
            path: "/nonexistent.toml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("/nonexistent.toml"));
        assert!(err.recovery_suggestion().contains("--config"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: PricingError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
