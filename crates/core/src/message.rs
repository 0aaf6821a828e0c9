use std::collections::BTreeMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use url::Url;

/// Header name to values. Names keep the casing they were recorded with.
pub type Headers = BTreeMap<String, Vec<String>>;

/// Which side of an HTTP exchange a message represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Request,
    Response,
    /// Any kind an adapter produced that the engine does not know. Passed
    /// through untouched.
    #[serde(other)]
    Unknown,
}

/// An HTTP request or response as handed over by a logging adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedHttpMessage {
    pub kind: MessageKind,

    pub url: Url,

    /// Request method. Only set for requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Response status code. Only set for responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,

    #[serde(default)]
    pub headers: Headers,

    /// Raw body. Carried as (lossy UTF-8) text in serialized form.
    #[serde(default, with = "body_text")]
    pub body: Bytes,

    /// Explicit content type. When absent the `Content-Type` header is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl NormalizedHttpMessage {
    /// Create an empty request message.
    #[must_use]
    pub fn request(method: impl Into<String>, url: Url) -> Self {
        Self {
            kind: MessageKind::Request,
            url,
            method: Some(method.into()),
            status_code: None,
            headers: Headers::new(),
            body: Bytes::new(),
            content_type: None,
        }
    }

    /// Create an empty response message.
    #[must_use]
    pub fn response(status_code: u16, url: Url) -> Self {
        Self {
            kind: MessageKind::Response,
            url,
            method: None,
            status_code: Some(status_code),
            headers: Headers::new(),
            body: Bytes::new(),
            content_type: None,
        }
    }

    /// Append a header value.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.entry(name.into()).or_default().push(value.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Whether the request method is `GET` (case-insensitive). Always false
    /// for responses.
    #[must_use]
    pub fn is_get(&self) -> bool {
        self.kind == MessageKind::Request
            && self
                .method
                .as_deref()
                .is_some_and(|method| method.eq_ignore_ascii_case("GET"))
    }

    /// Look up a header's values by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&[String]> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, values)| values.as_slice())
    }

    /// The effective content type: the explicit one, else the first
    /// `Content-Type` header value.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref().or_else(|| {
            self.header("content-type")
                .and_then(|values| values.first())
                .map(String::as_str)
        })
    }
}

mod body_text {
    use bytes::Bytes;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(body: &Bytes, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(body))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Bytes, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Bytes::from(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[test]
    fn builders_fill_kind_specific_fields() {
        let req = NormalizedHttpMessage::request("POST", url("https://example.com/login"));
        assert_eq!(req.kind, MessageKind::Request);
        assert_eq!(req.method.as_deref(), Some("POST"));
        assert_eq!(req.status_code, None);

        let resp = NormalizedHttpMessage::response(404, url("https://example.com/missing"));
        assert_eq!(resp.kind, MessageKind::Response);
        assert_eq!(resp.status_code, Some(404));
        assert_eq!(resp.method, None);
    }

    #[test]
    fn repeated_headers_accumulate() {
        let msg = NormalizedHttpMessage::request("GET", url("https://example.com/"))
            .with_header("Accept", "text/html")
            .with_header("Accept", "application/json");
        assert_eq!(msg.header("accept").unwrap().len(), 2);
    }

    #[test]
    fn content_type_falls_back_to_header() {
        let msg = NormalizedHttpMessage::request("POST", url("https://example.com/"))
            .with_header("content-TYPE", "application/json");
        assert_eq!(msg.content_type(), Some("application/json"));

        let msg = msg.with_content_type("text/plain");
        assert_eq!(msg.content_type(), Some("text/plain"));
    }

    #[test]
    fn get_detection_ignores_case() {
        assert!(NormalizedHttpMessage::request("get", url("https://example.com/")).is_get());
        assert!(!NormalizedHttpMessage::request("POST", url("https://example.com/")).is_get());
        assert!(!NormalizedHttpMessage::response(200, url("https://example.com/")).is_get());
    }

    #[test]
    fn unknown_kind_deserializes() {
        let msg: NormalizedHttpMessage = serde_json::from_str(
            r#"{"kind": "event", "url": "https://example.com/", "body": "hello"}"#,
        )
        .unwrap();
        assert_eq!(msg.kind, MessageKind::Unknown);
        assert_eq!(msg.body, Bytes::from_static(b"hello"));
    }

    #[test]
    fn body_serializes_as_text() {
        let msg = NormalizedHttpMessage::response(200, url("https://example.com/"))
            .with_body(r#"{"ok":true}"#);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["body"], r#"{"ok":true}"#);
        assert_eq!(json["kind"], "response");
        assert!(json.get("method").is_none());
    }
}
