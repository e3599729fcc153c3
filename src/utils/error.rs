use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Schema error: {message}")]
    SchemaError { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl ReportError {
    pub fn schema(message: impl Into<String>) -> Self {
        Self::SchemaError {
            message: message.into(),
        }
    }

    /// True for errors caused by how the tool was invoked rather than by the
    /// data itself; main maps these to a distinct exit code.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigError { .. } | Self::ValidationError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::SchemaError { message } => format!("The draw sheet is malformed: {}", message),
            Self::CsvError(e) => format!("Could not read the draw sheet: {}", e),
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::SerializationError(e) => format!("Could not encode the report: {}", e),
            Self::ConfigError { message } => format!("Invalid configuration: {}", message),
            Self::ProcessingError { message } => format!("Report generation failed: {}", message),
            Self::ValidationError { message } => format!("Invalid input: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::SchemaError { .. } => {
                "check that the CSV has a header row with the expected date column (see --date-column)"
            }
            Self::CsvError(_) => "check that the input file exists and is valid CSV",
            Self::IoError(_) => "check file paths and permissions",
            Self::SerializationError(_) | Self::ProcessingError { .. } => {
                "re-run with --verbose and inspect the log output"
            }
            Self::ConfigError { .. } => "run with --help to review the accepted options",
            Self::ValidationError { .. } => "correct the rejected field and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
