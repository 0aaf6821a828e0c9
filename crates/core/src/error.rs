use thiserror::Error;

/// Errors raised while building core model values from untrusted input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A serialized target name did not match any known target.
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    /// A rule definition could not be parsed.
    #[error("invalid rule: {0}")]
    InvalidRule(String),
}
