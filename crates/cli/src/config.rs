//! Configuration loading from hub-mcp.toml.

use hub::ApiConfig;
use serde::Deserialize;
use std::path::Path;

pub const BASE_URL_ENV: &str = "HUB_BASE_URL";
pub const TOKEN_ENV: &str = "HUB_TOKEN";

/// Top-level configuration.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Upstream API settings.
    #[serde(default)]
    pub api: ApiSection,
}

/// `[api]` table.
#[derive(Deserialize, Default)]
pub struct ApiSection {
    /// Root of the Docker Hub API, e.g. `https://hub.docker.com`.
    pub base_url: Option<String>,

    /// Bearer token for endpoints that require one.
    pub token: Option<String>,
}

impl std::fmt::Debug for ApiSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSection")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Load `path` if it exists, otherwise start from an empty config.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply `HUB_BASE_URL` / `HUB_TOKEN` from the process environment.
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by environment variable name. Empty values
    /// are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v: &String| !v.is_empty());
        if let Some(url) = non_empty(BASE_URL_ENV) {
            self.api.base_url = Some(url);
        }
        if let Some(token) = non_empty(TOKEN_ENV) {
            self.api.token = Some(token);
        }
        self
    }

    /// Build the validated API configuration.
    pub fn api_config(&self) -> Result<ApiConfig, ConfigError> {
        let base_url = self
            .api
            .base_url
            .as_deref()
            .ok_or(ConfigError::MissingBaseUrl)?;
        let config = ApiConfig::new(base_url)?;
        Ok(match &self.api.token {
            Some(token) => config.with_token(token.clone()),
            None => config,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("base URL not configured: set api.base_url, HUB_BASE_URL or --base-url")]
    MissingBaseUrl,

    #[error(transparent)]
    Invalid(#[from] hub::Error),
}
