//! Status classification.

use thiserror::Error;

/// Upstream answered with a 4xx/5xx status. The body is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("API error: {body}")]
pub struct ApiError {
    pub status: u16,
    pub body: String,
}

/// `Some` for any status >= 400, regardless of body.
pub fn classify(status: u16, body: &[u8]) -> Option<ApiError> {
    (status >= 400).then(|| ApiError {
        status,
        body: String::from_utf8_lossy(body).into_owned(),
    })
}
