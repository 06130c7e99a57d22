//! Typed request/response shapes attached to descriptors.
//!
//! A shape erases a concrete model type behind a function pointer so that
//! descriptors stay plain data while decoding still goes through serde.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Declared request body shape of an endpoint.
#[derive(Debug, Clone, Copy)]
pub struct RequestShape {
    pub name: &'static str,
    coerce: fn(Value) -> serde_json::Result<Value>,
}

impl RequestShape {
    pub fn of<T: DeserializeOwned + Serialize>() -> Self {
        Self {
            name: short_type_name::<T>(),
            coerce: coerce::<T>,
        }
    }

    /// Pass `value` through the model type: unknown fields are dropped and
    /// mistyped ones rejected.
    pub fn coerce(&self, value: Value) -> serde_json::Result<Value> {
        (self.coerce)(value)
    }
}

/// Declared response shape of an endpoint.
#[derive(Debug, Clone, Copy)]
pub struct ResponseShape {
    pub name: &'static str,
    canonicalize: fn(&[u8]) -> serde_json::Result<String>,
}

impl ResponseShape {
    pub fn of<T: DeserializeOwned + Serialize>() -> Self {
        Self {
            name: short_type_name::<T>(),
            canonicalize: canonicalize::<T>,
        }
    }

    /// Parse `body` as the model and re-serialize it pretty-printed, fields
    /// in model declaration order.
    pub fn canonicalize(&self, body: &[u8]) -> serde_json::Result<String> {
        (self.canonicalize)(body)
    }
}

fn coerce<T: DeserializeOwned + Serialize>(value: Value) -> serde_json::Result<Value> {
    let typed: T = serde_json::from_value(value)?;
    serde_json::to_value(typed)
}

fn canonicalize<T: DeserializeOwned + Serialize>(body: &[u8]) -> serde_json::Result<String> {
    let typed: T = serde_json::from_slice(body)?;
    serde_json::to_string_pretty(&typed)
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
