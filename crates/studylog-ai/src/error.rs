use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("AI API error: {0}")]
    ApiError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Model returned an empty response")]
    EmptyResponse,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
