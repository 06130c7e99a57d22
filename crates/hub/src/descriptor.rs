//! Static tool schema: what a tool is called, which endpoint it hits and
//! which arguments it takes.

use serde_json::{Map, Value, json};

use crate::shape::{RequestShape, ResponseShape};

/// Where a parameter lands in the HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Path,
    Query,
    Body,
}

/// Primitive JSON type a parameter is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl ParamType {
    /// JSON Schema type keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
            ParamType::Array => "array",
            ParamType::Object => "object",
        }
    }

    /// Whether `value` has this JSON type.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            ParamType::String => value.is_string(),
            ParamType::Number => value.is_number(),
            ParamType::Boolean => value.is_boolean(),
            ParamType::Array => value.is_array(),
            ParamType::Object => value.is_object(),
        }
    }
}

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// GET and HEAD never carry a request body.
    pub fn allows_body(self) -> bool {
        !matches!(self, Method::Get | Method::Head)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Authentication an endpoint requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Auth {
    #[default]
    None,
    /// `Authorization: Bearer <token>` from the configured credentials.
    Bearer,
}

/// One declared parameter of a tool.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    pub location: Location,
    pub required: bool,
    pub kind: ParamType,
    pub description: &'static str,
}

impl ParamSpec {
    /// A path parameter. Path parameters are always required.
    pub fn path(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            location: Location::Path,
            required: true,
            kind: ParamType::String,
            description,
        }
    }

    pub fn query(name: &'static str, kind: ParamType, description: &'static str) -> Self {
        Self {
            name,
            location: Location::Query,
            required: false,
            kind,
            description,
        }
    }

    pub fn body(name: &'static str, kind: ParamType, description: &'static str) -> Self {
        Self {
            name,
            location: Location::Body,
            required: false,
            kind,
            description,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Immutable description of one tool.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub params: Vec<ParamSpec>,
    pub request: Option<RequestShape>,
    pub response: Option<ResponseShape>,
    pub auth: Auth,
}

impl ToolDescriptor {
    pub fn new(name: &'static str, method: Method, path: &'static str) -> Self {
        Self {
            name,
            description: "",
            method,
            path,
            params: Vec::new(),
            request: None,
            response: None,
            auth: Auth::None,
        }
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    pub fn request(mut self, shape: RequestShape) -> Self {
        self.request = Some(shape);
        self
    }

    pub fn response(mut self, shape: ResponseShape) -> Self {
        self.response = Some(shape);
        self
    }

    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }

    /// Parameters at `location`, in declaration order.
    pub fn params_in(&self, location: Location) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter().filter(move |p| p.location == location)
    }

    /// Placeholder names in the path template, in template order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            names.push(&rest[start + 1..start + len]);
            rest = &rest[start + len + 1..];
        }
        names
    }

    /// JSON Schema for the tool's arguments, as advertised to MCP clients.
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        for param in &self.params {
            let mut schema = json!({ "type": param.kind.as_str() });
            if !param.description.is_empty() {
                schema["description"] = Value::String(param.description.to_string());
            }
            properties.insert(param.name.to_string(), schema);
        }
        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        let mut schema = json!({
            "type": "object",
            "properties": properties,
        });
        if !required.is_empty() {
            schema["required"] = json!(required);
        }
        schema
    }
}
