//! Result of one tool invocation.

use crate::bind::BindError;
use crate::classify::ApiError;
use crate::decode::Decoded;
use crate::invoke::TransportError;

/// Exactly one of these is produced per call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Decoded),
    ApiError(ApiError),
    ArgumentError(BindError),
    TransportError(TransportError),
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        !matches!(self, Outcome::Success(_))
    }

    /// Text shown to the caller.
    pub fn text(&self) -> String {
        match self {
            Outcome::Success(decoded) => decoded.text().to_string(),
            Outcome::ApiError(err) => err.to_string(),
            Outcome::ArgumentError(err) => err.to_string(),
            Outcome::TransportError(err) => err.to_string(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "success",
            Outcome::ApiError(_) => "api_error",
            Outcome::ArgumentError(_) => "argument_error",
            Outcome::TransportError(_) => "transport_error",
        }
    }
}

impl From<BindError> for Outcome {
    fn from(err: BindError) -> Self {
        Outcome::ArgumentError(err)
    }
}

impl From<TransportError> for Outcome {
    fn from(err: TransportError) -> Self {
        Outcome::TransportError(err)
    }
}

impl From<ApiError> for Outcome {
    fn from(err: ApiError) -> Self {
        Outcome::ApiError(err)
    }
}
