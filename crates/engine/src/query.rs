use httpscrub_core::{MASK_TOKEN, RedactionRule, wildcard_rule};
use url::form_urlencoded;

use crate::field::{FieldAction, field_action};

/// Redact a URL query string (without the leading `?`).
///
/// `rules` are the rules already selected for the query target. A removing
/// wildcard clears the query; a masking wildcard replaces it with the single
/// marker pair `redacted=1`. Otherwise each pair whose key matches a rule is
/// dropped or has its value replaced with `redacted`. Repeated keys are kept
/// as separate pairs and a key without `=` counts as an empty value. Pairs
/// that match no rule pass through with their original encoding.
#[must_use]
pub fn redact_query(query: &str, rules: &[RedactionRule]) -> String {
    if rules.is_empty() {
        return query.to_owned();
    }
    if let Some(wildcard) = wildcard_rule(rules) {
        return wildcard_replacement(wildcard).to_owned();
    }
    String::from_utf8_lossy(&redact_pairs(query.as_bytes(), rules)).into_owned()
}

pub(crate) fn wildcard_replacement(wildcard: &RedactionRule) -> &'static str {
    if wildcard.remove { "" } else { "redacted=1" }
}

/// Field-rule redaction over urlencoded pairs. Shared with form bodies.
///
/// Keys are decoded only to be matched. Unmatched pairs are copied byte for
/// byte and masked pairs keep their raw key, so nothing is re-encoded.
pub(crate) fn redact_pairs(input: &[u8], rules: &[RedactionRule]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    for pair in input.split(|&b| b == b'&').filter(|pair| !pair.is_empty()) {
        let raw_key = pair.split(|&b| b == b'=').next().unwrap_or(pair);
        let Some((key, _)) = form_urlencoded::parse(pair).next() else {
            continue;
        };
        let action = field_action(rules, &key, false);
        if action == Some(FieldAction::Remove) {
            continue;
        }
        if !out.is_empty() {
            out.push(b'&');
        }
        if action == Some(FieldAction::Mask) {
            out.extend_from_slice(raw_key);
            out.push(b'=');
            out.extend_from_slice(MASK_TOKEN.as_bytes());
        } else {
            out.extend_from_slice(pair);
        }
    }
    out
}
