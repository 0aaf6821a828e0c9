use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::target::RedactionTargetType;

/// Match value that selects every field of a target.
pub const WILDCARD: &str = "*";

/// Placeholder written in place of masked values.
pub const MASK_TOKEN: &str = "redacted";

/// A single redaction directive.
///
/// Serialized as `{ "type": "...", "value": "...", "remove": false }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RedactionRule {
    /// Which part of the message the rule applies to.
    #[serde(rename = "type")]
    pub target: RedactionTargetType,

    /// Field, parameter or header name to match, or [`WILDCARD`].
    #[serde(rename = "value")]
    pub match_value: String,

    /// Delete the matched field instead of masking its value.
    #[serde(default)]
    pub remove: bool,
}

impl RedactionRule {
    /// Create a rule that masks the matched field.
    #[must_use]
    pub fn mask(target: RedactionTargetType, match_value: impl Into<String>) -> Self {
        Self {
            target,
            match_value: match_value.into(),
            remove: false,
        }
    }

    /// Create a rule that removes the matched field.
    #[must_use]
    pub fn remove(target: RedactionTargetType, match_value: impl Into<String>) -> Self {
        Self {
            target,
            match_value: match_value.into(),
            remove: true,
        }
    }

    /// Whether this rule covers every field of its target.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.match_value == WILDCARD
    }

    /// Whether this rule matches the field name `name` exactly.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.match_value == name
    }

    /// Case-insensitive variant of [`matches_name`](Self::matches_name), used for headers.
    #[must_use]
    pub fn matches_name_ignore_case(&self, name: &str) -> bool {
        self.match_value.eq_ignore_ascii_case(name)
    }
}

/// Return the wildcard rule governing `rules`, if any.
///
/// A removing wildcard wins over a masking one regardless of order; among
/// masking wildcards the first is returned.
#[must_use]
pub fn wildcard_rule(rules: &[RedactionRule]) -> Option<&RedactionRule> {
    let mut wildcards = rules.iter().filter(|rule| rule.is_wildcard());
    let first = wildcards.next()?;
    if first.remove {
        return Some(first);
    }
    wildcards.find(|rule| rule.remove).or(Some(first))
}

impl fmt::Display for RedactionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.target, self.match_value)?;
        if self.remove {
            f.write_str(":remove")?;
        }
        Ok(())
    }
}

/// Parses the compact `type:value[:remove]` form.
///
/// The value may itself contain `:`; only a trailing `:remove` or `:mask`
/// segment is interpreted.
impl FromStr for RedactionRule {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (target, rest) = s
            .split_once(':')
            .ok_or_else(|| CoreError::InvalidRule(format!("expected type:value, got '{s}'")))?;
        let target: RedactionTargetType = target.parse()?;

        let (value, remove) = match rest.rsplit_once(':') {
            Some((value, "remove")) => (value, true),
            Some((value, "mask")) => (value, false),
            _ => (rest, false),
        };
        if value.is_empty() {
            return Err(CoreError::InvalidRule(format!("empty match value in '{s}'")));
        }

        Ok(Self {
            target,
            match_value: value.to_owned(),
            remove,
        })
    }
}
