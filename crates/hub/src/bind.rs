//! Argument binding: untyped argument map in, validated parameters out.

use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::descriptor::{Location, ToolDescriptor};

/// Why a set of arguments could not be bound to a tool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("invalid arguments: expected an object, got {0}")]
    InvalidArguments(&'static str),

    #[error("missing required parameter: {0}")]
    MissingRequired(String),

    #[error("invalid parameter {name}: {reason}")]
    TypeMismatch { name: String, reason: String },
}

impl BindError {
    fn mismatch(name: &str, reason: impl Into<String>) -> Self {
        Self::TypeMismatch {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Parameters validated against a descriptor, partitioned by location.
///
/// `path` and `query` keep descriptor declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundParams {
    pub path: Vec<(&'static str, String)>,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl BoundParams {
    pub fn path_value(&self, name: &str) -> Option<&str> {
        self.path
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Unwrap the raw `arguments` payload of a call. Absent means no arguments.
pub fn arguments(raw: Option<Value>) -> Result<Map<String, Value>, BindError> {
    match raw {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(other) => Err(BindError::InvalidArguments(json_type(&other))),
    }
}

/// Validate `args` against `descriptor`.
///
/// Keys the descriptor does not declare are ignored. Pure: no I/O.
pub fn bind(
    args: &Map<String, Value>,
    descriptor: &ToolDescriptor,
) -> Result<BoundParams, BindError> {
    let mut bound = BoundParams::default();

    for param in descriptor.params_in(Location::Path) {
        match present(args, param.name) {
            None if param.required => {
                return Err(BindError::MissingRequired(param.name.to_string()));
            }
            None => {}
            Some(Value::String(s)) => {
                check_segment(s).map_err(|reason| BindError::mismatch(param.name, reason))?;
                bound.path.push((param.name, s.clone()));
            }
            Some(other) => {
                return Err(BindError::mismatch(
                    param.name,
                    format!("expected string, got {}", json_type(other)),
                ));
            }
        }
    }

    for param in descriptor.params_in(Location::Query) {
        let Some(value) = present(args, param.name) else {
            if param.required {
                return Err(BindError::MissingRequired(param.name.to_string()));
            }
            continue;
        };
        let text = format_scalar(value).ok_or_else(|| {
            BindError::mismatch(
                param.name,
                format!("expected a scalar, got {}", json_type(value)),
            )
        })?;
        bound.query.push((param.name, text));
    }

    if let Some(shape) = &descriptor.request {
        let mut object = Map::new();
        for param in descriptor.params_in(Location::Body) {
            match present(args, param.name) {
                None if param.required => {
                    return Err(BindError::MissingRequired(param.name.to_string()));
                }
                None => {}
                Some(value) if !param.kind.accepts(value) => {
                    return Err(BindError::mismatch(
                        param.name,
                        format!(
                            "expected {}, got {}",
                            param.kind.as_str(),
                            json_type(value)
                        ),
                    ));
                }
                Some(value) => {
                    object.insert(param.name.to_string(), value.clone());
                }
            }
        }
        let body = shape
            .coerce(Value::Object(object))
            .map_err(|e| BindError::mismatch(shape.name, e.to_string()))?;
        bound.body = Some(body);
    }

    Ok(bound)
}

/// A path value must stay exactly one segment after substitution.
fn check_segment(value: &str) -> Result<(), &'static str> {
    match value {
        "" => Err("must not be empty"),
        "." | ".." => Err("must not be a dot segment"),
        _ if value.contains(['/', '?', '#']) => Err("must not contain '/', '?' or '#'"),
        _ => Ok(()),
    }
}

/// Explicit `null` counts as absent.
fn present<'a>(args: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    args.get(name).filter(|v| !v.is_null())
}

/// Render a scalar the way it appears in a query string.
///
/// Integral numbers drop any fractional part (`2.0` renders `2`), so callers
/// that only have floating point numbers still produce upstream-friendly
/// values. Arrays and objects have no scalar form.
pub fn format_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(format_number(n)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn format_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => format!("{f}"),
        None => n.to_string(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
