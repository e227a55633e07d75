use thiserror::Error;

#[derive(Error, Debug)]
pub enum DebugAiError {
    #[error("{0}")]
    Llm(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API key not found in environment variable {0}")]
    MissingApiKey(String),

    #[error("Input is empty")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DebugAiError>;
