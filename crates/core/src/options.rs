use serde::{Deserialize, Serialize};

/// What to do with a body whose content type cannot be parsed structurally
/// when only field-specific rules apply to it.
///
/// Wildcard rules ignore this setting: a wildcard always masks or removes the
/// whole body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnknownContentPolicy {
    /// Leave the body unchanged.
    #[default]
    PassThrough,
    /// Replace the whole body with the mask token.
    Mask,
}

/// Behavioral switches for the redaction engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RedactionOptions {
    /// Also redact bodies of `GET` requests. Off by default; `GET` bodies are
    /// left untouched.
    #[serde(default)]
    pub redact_get_bodies: bool,

    /// Fallback for bodies that are neither JSON nor URL-encoded forms.
    #[serde(default)]
    pub unknown_content: UnknownContentPolicy,
}
