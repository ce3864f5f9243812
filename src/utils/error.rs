use thiserror::Error;

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Column '{column}' not found in table header")]
    ColumnNotFound { column: String },
}

pub type Result<T> = std::result::Result<T, DisplayError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DisplayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DisplayError::IoError(_) => ErrorCategory::Io,
            DisplayError::CsvError(_)
            | DisplayError::SerializationError(_)
            | DisplayError::ColumnNotFound { .. } => ErrorCategory::Data,
            DisplayError::ConfigError { .. }
            | DisplayError::ConfigValidationError { .. }
            | DisplayError::InvalidConfigValueError { .. }
            | DisplayError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DisplayError::IoError(_) => ErrorSeverity::Critical,
            DisplayError::CsvError(_) | DisplayError::SerializationError(_) => ErrorSeverity::High,
            DisplayError::ColumnNotFound { .. } => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DisplayError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
            DisplayError::CsvError(_) => {
                "Make sure the table is valid CSV with a header row".to_string()
            }
            DisplayError::SerializationError(_) => {
                "Report this as a bug; the output could not be serialized".to_string()
            }
            DisplayError::ConfigError { .. } | DisplayError::ConfigValidationError { .. } => {
                "Check the TOML syntax of the configuration file".to_string()
            }
            DisplayError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            DisplayError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration", field)
            }
            DisplayError::ColumnNotFound { column } => {
                format!("Pass one of the header names instead of '{}'", column)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not access a file: {}", self),
            ErrorCategory::Data => format!("Could not process the table: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_not_found_is_medium_data_error() {
        let err = DisplayError::ColumnNotFound {
            column: "port".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("port"));
    }

    #[test]
    fn test_config_errors_are_configuration_category() {
        let err = DisplayError::InvalidConfigValueError {
            field: "ticks.count".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.user_friendly_message().starts_with("Invalid configuration"));
    }
}
