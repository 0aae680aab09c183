use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("Invalid argument for {operation}: {value} ({reason})")]
    InvalidArgument {
        operation: String,
        value: String,
        reason: String,
    },

    #[error("Arithmetic overflow in {operation} for input {value}")]
    Overflow { operation: String, value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
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

impl ErrorSeverity {
    /// Process exit code for a failure of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl TourError {
    pub fn invalid_argument(operation: &str, value: impl ToString, reason: &str) -> Self {
        TourError::InvalidArgument {
            operation: operation.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn overflow(operation: &str, value: impl ToString) -> Self {
        TourError::Overflow {
            operation: operation.to_string(),
            value: value.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            TourError::InvalidArgument { .. } => ErrorCategory::Input,
            TourError::Overflow { .. } => ErrorCategory::Arithmetic,
            TourError::ConfigError { .. }
            | TourError::InvalidConfigValueError { .. }
            | TourError::TomlError(_) => ErrorCategory::Configuration,
            TourError::IoError(_) | TourError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Arithmetic => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TourError::InvalidArgument { operation, .. } => {
                format!("Pass a value accepted by {}", operation)
            }
            TourError::Overflow { operation, .. } => {
                format!("Use a smaller input for {}", operation)
            }
            TourError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            TourError::ConfigError { .. } | TourError::TomlError(_) => {
                "Check that the configuration file is valid TOML".to_string()
            }
            TourError::IoError(_) => "Check that the file exists and is readable".to_string(),
            TourError::SerializationError(_) => "Report this as a bug".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TourError::InvalidArgument {
                operation, reason, ..
            } => format!("{} rejected its input: {}", operation, reason),
            TourError::Overflow { operation, value } => {
                format!("{} of {} does not fit in the result type", operation, value)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TourError>;
