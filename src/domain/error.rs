// Pipeline error taxonomy
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("hardware mismatch: {0}")]
    HardwareMismatch(String),

    #[error("display driver error: {0}")]
    Display(#[from] std::io::Error),

    #[error("gpio error: {0}")]
    Gpio(String),
}

impl From<reqwest::Error> for PipelineError {
    fn from(err: reqwest::Error) -> Self {
        PipelineError::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
