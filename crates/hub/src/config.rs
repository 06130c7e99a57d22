//! Upstream API configuration shared by every tool.

use crate::error::{Error, Result};

/// Where requests go and which credentials they may carry.
#[derive(Clone)]
pub struct ApiConfig {
    base_url: String,
    token: Option<String>,
}

impl ApiConfig {
    /// Validate and normalize `base_url`. A trailing `/` is dropped so path
    /// templates can be appended directly.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let url = reqwest::Url::parse(trimmed)
            .map_err(|e| Error::InvalidBaseUrl(format!("{raw}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidBaseUrl(format!(
                "{raw}: unsupported scheme {}",
                url.scheme()
            )));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(Error::InvalidBaseUrl(format!(
                "{raw}: must not contain a query or fragment"
            )));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let config = ApiConfig::new("https://hub.docker.com/").unwrap();
        assert_eq!(config.base_url(), "https://hub.docker.com");
    }

    #[test]
    fn keeps_path_prefix() {
        let config = ApiConfig::new("http://127.0.0.1:8080/mirror").unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:8080/mirror");
    }

    #[test]
    fn rejects_non_http() {
        assert!(matches!(
            ApiConfig::new("ftp://hub.docker.com"),
            Err(Error::InvalidBaseUrl(_))
        ));
        assert!(ApiConfig::new("not a url").is_err());
        assert!(ApiConfig::new("https://hub.docker.com?x=1").is_err());
    }

    #[test]
    fn debug_redacts_token() {
        let config = ApiConfig::new("https://hub.docker.com")
            .unwrap()
            .with_token("hunter2");
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("redacted"));
        assert_eq!(config.token(), Some("hunter2"));
    }
}
