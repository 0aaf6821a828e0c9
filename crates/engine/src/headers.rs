use httpscrub_core::{Headers, MASK_TOKEN, RedactionRule, wildcard_rule};

use crate::field::{FieldAction, field_action};

/// Redact a header map with the rules selected for the header target.
///
/// Header names match case-insensitively and keep their original casing in
/// the output. A removing wildcard drops every header; a masking wildcard
/// keeps every header but masks all of its values.
#[must_use]
pub fn redact_headers(headers: &Headers, rules: &[RedactionRule]) -> Headers {
    if rules.is_empty() {
        return headers.clone();
    }
    if let Some(wildcard) = wildcard_rule(rules) {
        if wildcard.remove {
            return Headers::new();
        }
        return headers
            .iter()
            .map(|(name, values)| (name.clone(), masked(values)))
            .collect();
    }

    headers
        .iter()
        .filter_map(|(name, values)| match field_action(rules, name, true) {
            Some(FieldAction::Remove) => None,
            Some(FieldAction::Mask) => Some((name.clone(), masked(values))),
            None => Some((name.clone(), values.clone())),
        })
        .collect()
}

fn masked(values: &[String]) -> Vec<String> {
    vec![MASK_TOKEN.to_owned(); values.len().max(1)]
}
