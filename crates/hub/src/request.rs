//! Request construction from bound parameters.

use reqwest::Url;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::bind::BoundParams;
use crate::config::ApiConfig;
use crate::descriptor::{Auth, Method, ToolDescriptor};
use crate::invoke::TransportError;

const JSON: &str = "application/json";

/// A fully resolved HTTP request, ready for a [`Transport`](crate::Transport).
#[derive(Debug, Clone)]
pub struct BuiltRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Build the request for `descriptor` from already-bound parameters.
///
/// Fails only when the configured base URL and the substituted path do not
/// form a valid URL, or when required credentials are missing.
pub fn build(
    config: &ApiConfig,
    descriptor: &ToolDescriptor,
    bound: BoundParams,
) -> Result<BuiltRequest, TransportError> {
    let path = substitute(descriptor.path, &bound);
    let mut url = Url::parse(&format!("{}{path}", config.base_url()))
        .map_err(|e| TransportError::Build(format!("invalid URL: {e}")))?;

    if !bound.query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in &bound.query {
            pairs.append_pair(name, value);
        }
    }

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(JSON));

    if descriptor.auth == Auth::Bearer {
        let token = config.token().ok_or_else(|| {
            TransportError::Build(format!(
                "{} requires a token but none is configured",
                descriptor.name
            ))
        })?;
        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| TransportError::Build(format!("invalid token: {e}")))?;
        headers.insert(AUTHORIZATION, value);
    }

    let body = match bound.body {
        Some(body) if descriptor.method.allows_body() => {
            let bytes = serde_json::to_vec(&body)
                .map_err(|e| TransportError::Build(format!("encode body: {e}")))?;
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
            Some(bytes)
        }
        _ => None,
    };

    Ok(BuiltRequest {
        method: descriptor.method,
        url,
        headers,
        body,
    })
}

/// Replace each `{name}` in `template` with its bound path value, verbatim.
///
/// Placeholders without a bound value are left as-is; the catalog tests
/// guarantee that never happens for shipped descriptors.
pub fn substitute(template: &str, bound: &BoundParams) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let name = &rest[start + 1..start + len];
        out.push_str(&rest[..start]);
        match bound.path_value(name) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[start..=start + len]),
        }
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{ParamSpec, ParamType};
    use crate::shape::RequestShape;
    use serde_json::json;

    fn config() -> ApiConfig {
        ApiConfig::new("https://hub.example.com/").unwrap()
    }

    fn bound_path(pairs: &[(&'static str, &str)]) -> BoundParams {
        BoundParams {
            path: pairs.iter().map(|(k, v)| (*k, v.to_string())).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn substitutes_path_verbatim() {
        let bound = bound_path(&[
            ("namespace", "foo"),
            ("repository", "bar"),
            ("digest", "sha256:abc"),
        ]);
        assert_eq!(
            substitute(
                "/v2/namespaces/{namespace}/repositories/{repository}/images/{digest}/tags",
                &bound
            ),
            "/v2/namespaces/foo/repositories/bar/images/sha256:abc/tags"
        );
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let bound = bound_path(&[("a", "{b}"), ("b", "x")]);
        assert_eq!(substitute("/{a}/{b}", &bound), "/{b}/x");
    }

    #[test]
    fn get_has_accept_header_and_no_body() {
        let tool = ToolDescriptor::new("t", Method::Get, "/v2/access-tokens");
        let req = build(&config(), &tool, BoundParams::default()).unwrap();
        assert_eq!(req.url.as_str(), "https://hub.example.com/v2/access-tokens");
        assert_eq!(req.headers[ACCEPT], JSON);
        assert!(req.headers.get(CONTENT_TYPE).is_none());
        assert!(req.headers.get(AUTHORIZATION).is_none());
        assert!(req.body.is_none());
    }

    #[test]
    fn query_only_for_bound_params() {
        let tool = ToolDescriptor::new("t", Method::Get, "/v2/access-tokens");
        let bound = BoundParams {
            query: vec![("page", "2".to_string())],
            ..Default::default()
        };
        let req = build(&config(), &tool, bound).unwrap();
        assert_eq!(req.url.query(), Some("page=2"));
    }

    #[test]
    fn query_values_are_encoded() {
        let tool = ToolDescriptor::new("t", Method::Get, "/v2/auditlogs/acme");
        let bound = BoundParams {
            query: vec![
                ("action", "repo.tag.push".to_string()),
                ("name", "a b&c".to_string()),
            ],
            ..Default::default()
        };
        let req = build(&config(), &tool, bound).unwrap();
        assert_eq!(req.url.query(), Some("action=repo.tag.push&name=a+b%26c"));
    }

    #[test]
    fn post_carries_json_body() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Body {
            dry_run: bool,
        }
        let path = "/v2/namespaces/{namespace}/delete-images";
        let tool = ToolDescriptor::new("t", Method::Post, path)
            .param(ParamSpec::path("namespace", ""))
            .param(ParamSpec::body("dry_run", ParamType::Boolean, ""))
            .request(RequestShape::of::<Body>());
        let bound = BoundParams {
            path: vec![("namespace", "foo".to_string())],
            body: Some(json!({"dry_run": true})),
            ..Default::default()
        };
        let req = build(&config(), &tool, bound).unwrap();
        assert_eq!(req.url.path(), "/v2/namespaces/foo/delete-images");
        assert_eq!(req.headers[CONTENT_TYPE], JSON);
        assert_eq!(req.body.as_deref(), Some(br#"{"dry_run":true}"#.as_slice()));
    }

    #[test]
    fn head_never_carries_body() {
        let tool = ToolDescriptor::new("t", Method::Head, "/v2/x");
        let bound = BoundParams {
            body: Some(json!({"ignored": true})),
            ..Default::default()
        };
        let req = build(&config(), &tool, bound).unwrap();
        assert!(req.body.is_none());
        assert!(req.headers.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn bearer_auth_uses_configured_token() {
        let tool = ToolDescriptor::new("t", Method::Get, "/v2/x").auth(Auth::Bearer);
        let config = config().with_token("secret");
        let req = build(&config, &tool, BoundParams::default()).unwrap();
        assert_eq!(req.headers[AUTHORIZATION], "Bearer secret");
    }

    #[test]
    fn bearer_auth_without_token_fails() {
        let tool = ToolDescriptor::new("t", Method::Get, "/v2/x").auth(Auth::Bearer);
        let err = build(&config(), &tool, BoundParams::default()).unwrap_err();
        assert!(matches!(err, TransportError::Build(_)));
    }
}
