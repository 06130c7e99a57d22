use thiserror::Error;

/// Errors outside a single invocation's outcome.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("tool not found: {0}")]
    ToolNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
