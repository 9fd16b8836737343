use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrieflyError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Document store error: {0}")]
    Store(String),

    #[error("Identity error: {0}")]
    Identity(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BrieflyResult<T> = Result<T, BrieflyError>;
