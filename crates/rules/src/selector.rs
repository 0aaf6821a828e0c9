use httpscrub_core::{RedactionRule, RedactionTargetType, wildcard_rule};

/// Compute the effective rules for one target.
///
/// Selection runs in two passes over the rules relevant to `target` (its own
/// rules plus `Always` rules):
///
/// 1. Wildcard precedence. A removing wildcard wins outright; otherwise a
///    masking wildcard wins. Either way the result is that single rule, since
///    it already covers every field of the target.
/// 2. Without a wildcard, every relevant field rule is returned.
///
/// An empty result means the target must be left untouched.
#[must_use]
pub fn select_for_target(
    rules: &[RedactionRule],
    target: RedactionTargetType,
) -> Vec<RedactionRule> {
    let relevant: Vec<RedactionRule> = rules
        .iter()
        .filter(|rule| rule.target.applies_to(target))
        .cloned()
        .collect();

    if let Some(wildcard) = wildcard_rule(&relevant) {
        return vec![wildcard.clone()];
    }

    relevant
}
