//! HTTP transport.

use std::future::Future;

use thiserror::Error;

use crate::descriptor::Method;
use crate::request::BuiltRequest;

/// Failure to obtain a response at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("failed to build request: {0}")]
    Build(String),

    #[error("request failed: {0}")]
    Send(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Status and body of any HTTP response, success or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Sends a built request and hands back whatever came over the wire.
///
/// Implementations must not interpret the status code; classification
/// happens after the transport returns.
pub trait Transport: Send + Sync + 'static {
    fn send(
        &self,
        request: BuiltRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: BuiltRequest) -> Result<RawResponse, TransportError> {
        let mut req = self
            .client
            .request(to_reqwest(request.method), request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            req = req.body(body);
        }

        let response = req
            .send()
            .await
            .map_err(|e| TransportError::Send(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Head => reqwest::Method::HEAD,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods_map_one_to_one() {
        for method in [
            Method::Get,
            Method::Head,
            Method::Post,
            Method::Put,
            Method::Patch,
            Method::Delete,
        ] {
            assert_eq!(to_reqwest(method).as_str(), method.as_str());
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            TransportError::Send("connection refused".into()).to_string(),
            "request failed: connection refused"
        );
    }
}
