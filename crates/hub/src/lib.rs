//! Docker Hub REST endpoints as invocable tools.
//!
//! Every endpoint is a static [`ToolDescriptor`]. A [`Catalog`] binds the
//! descriptors to an [`ApiConfig`] and a [`Transport`], and each call runs
//! the same pipeline:
//!
//! 1. **bind** the untyped argument map into [`BoundParams`],
//! 2. **build** a [`BuiltRequest`] from the path template and bound values,
//! 3. **send** it through the transport,
//! 4. **classify** any status >= 400 as an [`ApiError`],
//! 5. **decode** the body as the declared shape, falling back to raw text.
//!
//! The result is always an [`Outcome`]; a bad call never takes the process
//! down.
//!
//! # Example
//!
//! ```no_run
//! use hub::{ApiConfig, Catalog};
//! use serde_json::json;
//!
//! # async fn example() -> hub::Result<()> {
//! let catalog = Catalog::new(ApiConfig::new("https://hub.docker.com")?);
//! let outcome = catalog
//!     .invoke(
//!         "get_v2_namespaces_namespace_repositories_repository_tags",
//!         Some(json!({"namespace": "library", "repository": "alpine", "page_size": 5})),
//!     )
//!     .await?;
//! println!("{}", outcome.text());
//! # Ok(())
//! # }
//! ```

mod bind;
pub mod catalog;
mod classify;
mod config;
mod decode;
mod descriptor;
mod error;
mod handler;
mod invoke;
pub mod models;
mod outcome;
mod registry;
mod request;
mod shape;

pub use bind::{BindError, BoundParams, arguments, bind, format_scalar};
pub use classify::{ApiError, classify};
pub use config::ApiConfig;
pub use decode::{Decoded, decode};
pub use descriptor::{Auth, Location, Method, ParamSpec, ParamType, ToolDescriptor};
pub use error::{Error, Result};
pub use invoke::{HttpTransport, RawResponse, Transport, TransportError};
pub use outcome::Outcome;
pub use registry::{Catalog, Tool};
pub use request::{BuiltRequest, build};
pub use shape::{RequestShape, ResponseShape};
