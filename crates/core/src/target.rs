use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The part of an HTTP message a redaction rule applies to.
///
/// The serialized names (`always`, `query`, `header`, `request`, `response`)
/// are the ones used by the persisted settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RedactionTargetType {
    /// Applies to every target.
    #[serde(rename = "always")]
    Always,
    /// URL query string parameters.
    #[serde(rename = "query")]
    Query,
    /// Message headers.
    #[serde(rename = "header")]
    Header,
    /// Request body fields.
    #[serde(rename = "request")]
    RequestBody,
    /// Response body fields.
    #[serde(rename = "response")]
    ResponseBody,
}

impl RedactionTargetType {
    /// All target types, `Always` first.
    pub const ALL: [Self; 5] = [
        Self::Always,
        Self::Query,
        Self::Header,
        Self::RequestBody,
        Self::ResponseBody,
    ];

    /// The serialized name of this target.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Query => "query",
            Self::Header => "header",
            Self::RequestBody => "request",
            Self::ResponseBody => "response",
        }
    }

    /// Whether a rule declared for `self` is relevant when processing `target`.
    ///
    /// `Always` rules are relevant for every target.
    #[must_use]
    pub fn applies_to(self, target: Self) -> bool {
        self == Self::Always || self == target
    }
}

impl fmt::Display for RedactionTargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RedactionTargetType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|target| target.as_str() == s)
            .ok_or_else(|| CoreError::InvalidTarget(s.to_owned()))
    }
}
