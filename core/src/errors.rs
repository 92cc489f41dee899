use thiserror::Error;

/// Errors raised while talking to the check-symptoms endpoint or loading config
#[derive(Error, Debug)]
pub enum SymptomError {
    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Request Error: {0}")]
    RequestError(String),

    #[error("Response Error: {0}")]
    ResponseError(String),

    #[error("Parsing Error: {0}")]
    ParsingError(String),

    #[error("HTTP Error: {status_code} - {message}")]
    HttpError { status_code: u16, message: String },
}

/// Result type for symptom query operations
pub type SymptomResult<T> = Result<T, SymptomError>;
