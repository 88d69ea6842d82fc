use thiserror::Error;

#[derive(Error, Debug)]
pub enum RailError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("XML parse error: {message}")]
    ParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),
}

impl From<roxmltree::Error> for RailError {
    fn from(err: roxmltree::Error) -> Self {
        RailError::ParseError {
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Fetch,
    Parse,
    Validation,
    Config,
    Output,
}

impl RailError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RailError::ApiError(_) | RailError::HttpStatusError { .. } => ErrorCategory::Fetch,
            RailError::ParseError { .. } => ErrorCategory::Parse,
            RailError::ValidationError { .. } => ErrorCategory::Validation,
            RailError::ConfigError { .. } => ErrorCategory::Config,
            RailError::IoError(_) | RailError::SerializationError(_) | RailError::CsvError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Fetch => "Check network connectivity and that the API base URL is reachable",
            ErrorCategory::Parse => "The API returned a document that is not valid XML; try again later",
            ErrorCategory::Validation => "Check the command arguments (categories: mainline, suburban, dart)",
            ErrorCategory::Config => "Check the configuration file and --base-url/--timeout-seconds flags",
            ErrorCategory::Output => "Check that stdout is writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RailError::ApiError(e) if e.is_timeout() => "Request to the Irish Rail API timed out".to_string(),
            RailError::ApiError(_) => "Could not reach the Irish Rail API".to_string(),
            RailError::HttpStatusError { status, .. } => {
                format!("The Irish Rail API answered with HTTP {}", status)
            }
            other => other.to_string(),
        }
    }

    pub(crate) fn validation(field: &str, value: &str, reason: &str) -> Self {
        RailError::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RailError>;
