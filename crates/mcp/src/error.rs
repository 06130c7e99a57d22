//! MCP error types.

use crate::protocol::{INTERNAL_ERROR, INVALID_PARAMS, JsonRpcError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("stdio error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("tool not found: {0}")]
    ToolNotFound(String),
}

impl Error {
    /// JSON-RPC error reported back to the client for a failed request.
    pub fn to_rpc_error(&self) -> JsonRpcError {
        match self {
            Error::ToolNotFound(_) => JsonRpcError::new(INVALID_PARAMS, self.to_string()),
            _ => JsonRpcError::new(INTERNAL_ERROR, self.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
