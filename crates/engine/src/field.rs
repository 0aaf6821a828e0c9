use httpscrub_core::RedactionRule;

/// What to do with a single named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldAction {
    Mask,
    Remove,
}

/// Decide the action for `name` from field-specific rules.
///
/// When several rules name the same field, removal wins over masking.
pub(crate) fn field_action(
    rules: &[RedactionRule],
    name: &str,
    ignore_case: bool,
) -> Option<FieldAction> {
    let mut action = None;
    for rule in rules {
        let hit = if ignore_case {
            rule.matches_name_ignore_case(name)
        } else {
            rule.matches_name(name)
        };
        if !hit {
            continue;
        }
        if rule.remove {
            return Some(FieldAction::Remove);
        }
        action = Some(FieldAction::Mask);
    }
    action
}
