use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptimiserError {
    #[error("{field} must be a number, got '{value}'")]
    ParseError { field: String, value: String },

    #[error("{field} {reason}, got {value}")]
    RangeError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown objective selection '{value}'")]
    SelectionError { value: String },

    #[error("Invalid optimization objective '{value}'")]
    InvalidObjectiveError { value: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2, // 輸入錯誤，修正後重試
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3, // 系統錯誤
        }
    }
}

impl OptimiserError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OptimiserError::ParseError { .. }
            | OptimiserError::RangeError { .. }
            | OptimiserError::SelectionError { .. }
            | OptimiserError::InvalidObjectiveError { .. } => ErrorCategory::Input,
            OptimiserError::ConfigError { .. } | OptimiserError::TomlError(_) => {
                ErrorCategory::Configuration
            }
            OptimiserError::IoError(_)
            | OptimiserError::SerializationError(_)
            | OptimiserError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Whether this error came from the input form rather than the estimator.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            OptimiserError::ParseError { .. }
                | OptimiserError::RangeError { .. }
                | OptimiserError::SelectionError { .. }
        )
    }

    /// Message as shown next to the form fields.
    pub fn user_friendly_message(&self) -> String {
        if self.is_validation() {
            format!("Invalid input: {}", self)
        } else {
            format!("Error: {}", self)
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            OptimiserError::ParseError { .. } => {
                "Enter plain numbers such as 1000 or 2.5 for area, width and length"
            }
            OptimiserError::RangeError { .. } => {
                "All input values must be positive and describe a countable number of stalls"
            }
            OptimiserError::SelectionError { .. } | OptimiserError::InvalidObjectiveError { .. } => {
                "Choose 'Increase Parking Spaces' or 'Improve Traffic Flow'"
            }
            OptimiserError::ConfigError { .. } | OptimiserError::TomlError(_) => {
                "Check the batch file against the documented [batch] and [[lots]] layout"
            }
            OptimiserError::IoError(_) => "Check that the file exists and is readable",
            OptimiserError::SerializationError(_) | OptimiserError::CsvError(_) => {
                "Try a different output format or output path"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, OptimiserError>;
