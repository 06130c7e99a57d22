//! Success-body decoding.

use crate::shape::ResponseShape;

/// Text form of a successful response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// Body parsed as the declared model and re-serialized.
    Typed(String),
    /// Body passed through untouched.
    Raw(String),
}

impl Decoded {
    pub fn text(&self) -> &str {
        match self {
            Decoded::Typed(s) | Decoded::Raw(s) => s,
        }
    }
}

/// Decode a 2xx/3xx body. Never fails: anything that does not parse as
/// the declared shape (or has no shape) comes back raw.
pub fn decode(body: &[u8], shape: Option<&ResponseShape>) -> Decoded {
    if let Some(shape) = shape {
        match shape.canonicalize(body) {
            Ok(text) => return Decoded::Typed(text),
            Err(e) => tracing::debug!(shape = shape.name, error = %e, "falling back to raw body"),
        }
    }
    Decoded::Raw(String::from_utf8_lossy(body).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccessToken;

    fn shape() -> ResponseShape {
        ResponseShape::of::<AccessToken>()
    }

    #[test]
    fn typed_when_body_matches() {
        let decoded = decode(br#"{"uuid":"u1","token_label":"ci"}"#, Some(&shape()));
        let Decoded::Typed(text) = decoded else {
            panic!("expected typed");
        };
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["uuid"], "u1");
        assert_eq!(value["token_label"], "ci");
    }

    #[test]
    fn raw_when_body_is_not_json() {
        let body = b"<html>oops</html>";
        assert_eq!(
            decode(body, Some(&shape())),
            Decoded::Raw("<html>oops</html>".into())
        );
    }

    #[test]
    fn raw_without_shape() {
        assert_eq!(decode(b"", None), Decoded::Raw(String::new()));
        assert_eq!(decode(b"{}", None).text(), "{}");
    }

    #[test]
    fn empty_body_with_shape_is_raw() {
        assert_eq!(decode(b"", Some(&shape())), Decoded::Raw(String::new()));
    }
}
