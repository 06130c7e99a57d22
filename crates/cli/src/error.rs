//! CLI error types.

use thiserror::Error;

use crate::config::ConfigError;

/// CLI errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Configuration could not be loaded or is incomplete.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `--args` was not valid JSON.
    #[error("invalid --args: {0}")]
    InvalidArgs(serde_json::Error),

    /// The tool ran but its outcome was an error. The rendered text has
    /// already been printed.
    #[error("{tool} failed ({kind})")]
    CallFailed { tool: String, kind: &'static str },

    #[error(transparent)]
    Hub(#[from] hub::Error),

    #[error(transparent)]
    Mcp(#[from] mcp::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
