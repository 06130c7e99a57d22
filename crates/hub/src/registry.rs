//! Invocable tools and the catalog that owns them.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::bind::{arguments, bind};
use crate::catalog;
use crate::classify::classify;
use crate::config::ApiConfig;
use crate::decode::{Decoded, decode};
use crate::descriptor::ToolDescriptor;
use crate::error::{Error, Result};
use crate::invoke::{HttpTransport, Transport};
use crate::outcome::Outcome;
use crate::request;

struct Shared<T> {
    config: ApiConfig,
    transport: T,
}

/// A descriptor bound to configuration and a transport.
pub struct Tool<T = HttpTransport> {
    descriptor: ToolDescriptor,
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Tool<T> {
    fn clone(&self) -> Self {
        Self {
            descriptor: self.descriptor.clone(),
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Transport> Tool<T> {
    pub fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    /// Bind, build, send, classify, decode. Every failure becomes an
    /// [`Outcome`]; nothing escapes as a panic or an `Err`.
    pub async fn invoke(&self, args: &Map<String, Value>) -> Outcome {
        let outcome = match self.run(args).await {
            Ok(decoded) => Outcome::Success(decoded),
            Err(outcome) => outcome,
        };
        debug!(tool = self.name(), outcome = outcome.kind(), "invocation finished");
        outcome
    }

    async fn run(&self, args: &Map<String, Value>) -> std::result::Result<Decoded, Outcome> {
        let bound = bind(args, &self.descriptor)?;
        let request = request::build(&self.shared.config, &self.descriptor, bound)?;
        debug!(
            tool = self.name(),
            method = %request.method,
            url = %request.url,
            "sending request"
        );

        let response = self.shared.transport.send(request).await.map_err(|e| {
            warn!(tool = self.name(), error = %e, "transport failure");
            e
        })?;
        debug!(tool = self.name(), status = response.status, "response received");

        if let Some(err) = classify(response.status, &response.body) {
            return Err(err.into());
        }
        Ok(decode(&response.body, self.descriptor.response.as_ref()))
    }
}

/// The immutable set of tools served by one process.
pub struct Catalog<T = HttpTransport> {
    tools: Vec<Tool<T>>,
}

impl Catalog<HttpTransport> {
    /// Every Docker Hub endpoint, sent over HTTP.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> Catalog<T> {
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self::from_descriptors(config, transport, catalog::descriptors())
    }

    pub fn from_descriptors(
        config: ApiConfig,
        transport: T,
        descriptors: Vec<ToolDescriptor>,
    ) -> Self {
        let shared = Arc::new(Shared { config, transport });
        let tools = descriptors
            .into_iter()
            .map(|descriptor| Tool {
                descriptor,
                shared: Arc::clone(&shared),
            })
            .collect();
        Self { tools }
    }

    pub fn tools(&self) -> &[Tool<T>] {
        &self.tools
    }

    pub fn get(&self, name: &str) -> Option<&Tool<T>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Invoke `name` with a raw argument payload.
    ///
    /// Only an unknown tool name is an `Err`; everything else, including a
    /// payload that is not an object, is reported through the [`Outcome`].
    pub async fn invoke(&self, name: &str, raw: Option<Value>) -> Result<Outcome> {
        let tool = self
            .get(name)
            .ok_or_else(|| Error::ToolNotFound(name.to_string()))?;
        match arguments(raw) {
            Ok(args) => Ok(tool.invoke(&args).await),
            Err(e) => Ok(e.into()),
        }
    }
}
