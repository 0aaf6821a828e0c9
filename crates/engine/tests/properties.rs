//! Property-based tests for redaction invariants.

use bytes::Bytes;
use httpscrub_core::RedactionTargetType::{Header, Query, RequestBody};
use httpscrub_core::{Headers, RedactionRule};
use httpscrub_engine::{redact_body, redact_headers, redact_query};
use proptest::prelude::*;
use serde_json::{Map, Value};

const JSON: Option<&str> = Some("application/json");

fn header_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9-]{0,15}"
}

/// Flip the case of every other ASCII letter.
fn scramble_case(name: &str) -> String {
    name.chars()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    /// Redacting an already empty query or body with a removing wildcard
    /// keeps it empty.
    #[test]
    fn remove_wildcard_is_idempotent(query in "[a-z0-9=&]{0,40}") {
        let rules = vec![RedactionRule::remove(Query, "*")];
        let once = redact_query(&query, &rules);
        prop_assert_eq!(&once, "");
        prop_assert_eq!(redact_query(&once, &rules), "");

        let body_rules = vec![RedactionRule::remove(RequestBody, "*")];
        let body = redact_body(&Bytes::from(query), &body_rules, JSON);
        prop_assert!(body.is_empty());
        prop_assert!(redact_body(&body, &body_rules, JSON).is_empty());
    }

    /// A body that does not decode as JSON is replaced wholesale by the
    /// decode-error placeholder and none of its secret leaks.
    #[test]
    fn undecodable_json_never_leaks(secret in "SECRET_[A-Z0-9]{8,16}") {
        let raw = format!("{{\"password\": \"{secret}\", broken");
        let rules = vec![RedactionRule::mask(RequestBody, "password")];
        let out = redact_body(&Bytes::from(raw), &rules, JSON);

        let text: String = serde_json::from_slice(&out).unwrap();
        prop_assert!(text.starts_with("JSON decode error: "));
        prop_assert!(!text.contains(&secret));
    }

    /// Masking a field keeps every other key and yields valid JSON.
    #[test]
    fn mask_preserves_structure(
        fields in proptest::collection::btree_map("[a-z]{1,8}", "[a-zA-Z0-9 ]{0,12}", 1..8),
        target in "[a-z]{1,8}",
    ) {
        let object: Map<String, Value> = fields
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        let raw = serde_json::to_vec(&Value::Object(object)).unwrap();
        let rules = vec![RedactionRule::mask(RequestBody, target.clone())];

        let out = redact_body(&Bytes::from(raw), &rules, JSON);
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        let parsed = parsed.as_object().unwrap();

        prop_assert_eq!(parsed.len(), fields.len());
        for (key, value) in &fields {
            let expected = if *key == target { "redacted" } else { value.as_str() };
            prop_assert_eq!(parsed[key].as_str(), Some(expected));
        }
    }

    /// Header rules match regardless of the casing on either side.
    #[test]
    fn header_matching_ignores_case(name in header_name(), value in "[ -~]{0,20}") {
        let headers = Headers::from([(scramble_case(&name), vec![value])]);
        let rules = vec![RedactionRule::remove(Header, name.to_ascii_lowercase())];
        prop_assert!(redact_headers(&headers, &rules).is_empty());

        let rules = vec![RedactionRule::mask(Header, name.to_ascii_uppercase())];
        let out = redact_headers(&headers, &rules);
        prop_assert!(out.values().flatten().all(|v| v == "redacted"));
    }

    /// With a wildcard present, field rules add nothing visible.
    #[test]
    fn wildcard_masks_whole_query(query in "[a-z]{1,5}=[a-z0-9]{1,5}(&[a-z]{1,5}=[a-z0-9]{1,5}){0,4}") {
        let rules = vec![
            RedactionRule::remove(Query, "a"),
            RedactionRule::mask(Query, "*"),
        ];
        prop_assert_eq!(redact_query(&query, &rules), "redacted=1");
    }
}
