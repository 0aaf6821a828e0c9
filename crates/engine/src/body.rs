use bytes::Bytes;
use httpscrub_core::{MASK_TOKEN, RedactionRule, UnknownContentPolicy, wildcard_rule};
use serde_json::Value;
use tracing::warn;

use crate::error::BodyError;
use crate::field::{FieldAction, field_action};
use crate::query::{redact_pairs, wildcard_replacement};

/// How a body can be redacted, derived from its content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// `*/json` or `*+json`.
    Json,
    /// `application/x-www-form-urlencoded`.
    Form,
    /// Anything else, including a missing content type.
    Other,
}

impl ContentKind {
    /// Classify a content type (case-insensitive, parameters ignored).
    #[must_use]
    pub fn detect(content_type: Option<&str>) -> Self {
        let Some(content_type) = content_type else {
            return Self::Other;
        };
        let content_type = content_type.to_ascii_lowercase();
        if content_type.contains("/json") || content_type.contains("+json") {
            Self::Json
        } else if content_type.contains("/x-www-form-urlencoded") {
            Self::Form
        } else {
            Self::Other
        }
    }
}

/// Redact a body with the rules selected for its body target, leaving
/// unsupported content types untouched.
///
/// See [`redact_body_with`].
#[must_use]
pub fn redact_body(content: &Bytes, rules: &[RedactionRule], content_type: Option<&str>) -> Bytes {
    redact_body_with(content, rules, content_type, UnknownContentPolicy::PassThrough)
}

/// Redact a body with the rules selected for its body target.
///
/// - no rules: the content is returned as is;
/// - removing wildcard: empty body;
/// - masking wildcard: `"redacted"` for JSON, `redacted=1` for forms, and
///   `redacted` otherwise;
/// - field rules on JSON: object keys anywhere in the document are masked or
///   removed, arrays are walked but never redacted by index. A body that
///   fails to decode becomes the string `"JSON decode error: ..."`;
/// - field rules on forms: handled like a query string;
/// - field rules on anything else: governed by `unknown`.
#[must_use]
pub fn redact_body_with(
    content: &Bytes,
    rules: &[RedactionRule],
    content_type: Option<&str>,
    unknown: UnknownContentPolicy,
) -> Bytes {
    if rules.is_empty() {
        return content.clone();
    }

    let kind = ContentKind::detect(content_type);

    if let Some(wildcard) = wildcard_rule(rules) {
        if wildcard.remove {
            return Bytes::new();
        }
        return match kind {
            ContentKind::Json => Bytes::from(format!("\"{MASK_TOKEN}\"")),
            ContentKind::Form => Bytes::from_static(wildcard_replacement(wildcard).as_bytes()),
            ContentKind::Other => Bytes::from_static(MASK_TOKEN.as_bytes()),
        };
    }

    match kind {
        ContentKind::Json => redact_json_body(content, rules).unwrap_or_else(|e| {
            warn!(error = %e, "structured body redaction failed, substituting placeholder");
            e.placeholder()
        }),
        ContentKind::Form => Bytes::from(redact_pairs(content, rules)),
        ContentKind::Other => match unknown {
            UnknownContentPolicy::PassThrough => content.clone(),
            UnknownContentPolicy::Mask => Bytes::from_static(MASK_TOKEN.as_bytes()),
        },
    }
}

/// Decoding goes through `serde_json`'s recursion limit, so documents nested
/// too deeply to walk safely are rejected as decode errors.
fn redact_json_body(content: &[u8], rules: &[RedactionRule]) -> Result<Bytes, BodyError> {
    let mut value: Value = serde_json::from_slice(content).map_err(BodyError::Decode)?;
    redact_value(&mut value, rules);
    serde_json::to_vec(&value)
        .map(Bytes::from)
        .map_err(BodyError::Encode)
}

fn redact_value(value: &mut Value, rules: &[RedactionRule]) {
    match value {
        Value::Object(map) => {
            map.retain(|key, _| field_action(rules, key, false) != Some(FieldAction::Remove));
            for (key, child) in map.iter_mut() {
                if field_action(rules, key, false) == Some(FieldAction::Mask) {
                    *child = Value::String(MASK_TOKEN.to_owned());
                } else {
                    redact_value(child, rules);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                redact_value(item, rules);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpscrub_core::RedactionTargetType::{RequestBody, ResponseBody};
    use serde_json::json;

    const JSON: Option<&str> = Some("application/json");
    const FORM: Option<&str> = Some("application/x-www-form-urlencoded");

    fn body(raw: &str) -> Bytes {
        Bytes::from(raw.to_owned())
    }

    fn as_json(bytes: &Bytes) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn content_kind_detection() {
        assert_eq!(ContentKind::detect(JSON), ContentKind::Json);
        assert_eq!(
            ContentKind::detect(Some("application/vnd.api+json; charset=utf-8")),
            ContentKind::Json
        );
        assert_eq!(ContentKind::detect(Some("Application/JSON")), ContentKind::Json);
        assert_eq!(ContentKind::detect(FORM), ContentKind::Form);
        assert_eq!(ContentKind::detect(Some("text/html")), ContentKind::Other);
        assert_eq!(ContentKind::detect(None), ContentKind::Other);
    }

    #[test]
    fn masks_top_level_field() {
        let rules = vec![RedactionRule::mask(RequestBody, "password")];
        let out = redact_body(&body(r#"{"username":"user","password":"secret"}"#), &rules, JSON);
        assert_eq!(out, body(r#"{"username":"user","password":"redacted"}"#));
    }

    #[test]
    fn masks_nested_field_and_keeps_siblings() {
        let rules = vec![RedactionRule::mask(RequestBody, "password")];
        let out = redact_body(
            &body(r#"{"user":{"profile":{"password":"secret","email":"e@x.com"}}}"#),
            &rules,
            JSON,
        );
        assert_eq!(
            as_json(&out),
            json!({"user": {"profile": {"password": "redacted", "email": "e@x.com"}}})
        );
    }

    #[test]
    fn masked_value_becomes_string_regardless_of_type() {
        let rules = vec![RedactionRule::mask(ResponseBody, "card")];
        let out = redact_body(
            &body(r#"{"card":{"number":"4111","cvv":123},"n":[1,2]}"#),
            &rules,
            JSON,
        );
        assert_eq!(as_json(&out), json!({"card": "redacted", "n": [1, 2]}));
    }

    #[test]
    fn removes_keys_inside_arrays() {
        let rules = vec![RedactionRule::remove(ResponseBody, "token")];
        let out = redact_body(
            &body(r#"{"items":[{"id":1,"token":"a"},{"id":2,"token":"b"}],"token":"c"}"#),
            &rules,
            JSON,
        );
        assert_eq!(as_json(&out), json!({"items": [{"id": 1}, {"id": 2}]}));
    }

    #[test]
    fn top_level_array_is_walked() {
        let rules = vec![RedactionRule::mask(ResponseBody, "secret")];
        let out = redact_body(&body(r#"[{"secret":1},"secret",2]"#), &rules, JSON);
        assert_eq!(as_json(&out), json!([{"secret": "redacted"}, "secret", 2]));
    }

    #[test]
    fn decode_failure_yields_placeholder() {
        let rules = vec![RedactionRule::mask(RequestBody, "password")];
        let out = redact_body(&body(r#"{"password": "hunter2""#), &rules, JSON);
        let text: String = serde_json::from_slice(&out).unwrap();
        assert!(text.starts_with("JSON decode error: "));
        assert!(!text.contains("hunter2"));
    }

    #[test]
    fn wildcard_remove_empties_body() {
        let rules = vec![RedactionRule::remove(RequestBody, "*")];
        for content_type in [JSON, FORM, Some("text/plain"), None] {
            assert!(redact_body(&body("a=1"), &rules, content_type).is_empty());
        }
    }

    #[test]
    fn removing_wildcard_wins_over_earlier_mask() {
        let rules = vec![
            RedactionRule::mask(RequestBody, "*"),
            RedactionRule::remove(RequestBody, "*"),
        ];
        for content_type in [JSON, FORM, Some("text/plain")] {
            assert!(redact_body(&body(r#"{"a":1}"#), &rules, content_type).is_empty());
        }
    }

    #[test]
    fn wildcard_mask_depends_on_content_type() {
        let rules = vec![RedactionRule::mask(RequestBody, "*")];
        assert_eq!(redact_body(&body(r#"{"a":1}"#), &rules, JSON), body("\"redacted\""));
        assert_eq!(redact_body(&body("a=1"), &rules, FORM), body("redacted=1"));
        assert_eq!(redact_body(&body("<p>hi</p>"), &rules, Some("text/html")), body("redacted"));
    }

    #[test]
    fn form_body_uses_query_rules() {
        let rules = vec![
            RedactionRule::mask(RequestBody, "pwd"),
            RedactionRule::remove(RequestBody, "otp"),
        ];
        let out = redact_body(&body("log=admin&pwd=secret&otp=123"), &rules, FORM);
        assert_eq!(out, body("log=admin&pwd=redacted"));
    }

    #[test]
    fn unknown_content_passes_through_by_default() {
        let html = body(r#"<html><div class="password">secret</div></html>"#);
        let rules = vec![RedactionRule::mask(ResponseBody, "password")];
        assert_eq!(redact_body(&html, &rules, Some("text/html")), html);
    }

    #[test]
    fn unknown_content_can_be_masked() {
        let html = body(r#"<div class="password">secret</div>"#);
        let rules = vec![RedactionRule::mask(ResponseBody, "password")];
        let out = redact_body_with(&html, &rules, Some("text/html"), UnknownContentPolicy::Mask);
        assert_eq!(out, body("redacted"));
    }

    #[test]
    fn no_rules_returns_content_untouched() {
        let raw = body("{not json");
        assert_eq!(redact_body(&raw, &[], JSON), raw);
    }
}
