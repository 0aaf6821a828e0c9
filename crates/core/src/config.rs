//! Host/path scoped rule configuration.
//!
//! These types mirror the persisted settings shape:
//!
//! ```text
//! { redactions: [ { host, paths: [ { path, glob?, redactions: [ rule ] } ] } ],
//!   whitelist:  [ { host, glob?, paths?: [ { path, glob? } ] } ],
//!   options:    { ... } }
//! ```

use serde::{Deserialize, Serialize};

use crate::options::RedactionOptions;
use crate::rule::RedactionRule;

/// Rules attached to a request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRule {
    /// Path to match, or `*` for every path.
    pub path: String,

    /// Treat `path` as a prefix instead of requiring an exact match.
    #[serde(default)]
    pub glob: bool,

    /// Rules that apply when the path matches.
    #[serde(default, rename = "redactions")]
    pub rules: Vec<RedactionRule>,
}

impl PathRule {
    /// A path rule that matches every path.
    #[must_use]
    pub fn any(rules: Vec<RedactionRule>) -> Self {
        Self {
            path: "*".to_owned(),
            glob: false,
            rules,
        }
    }
}

/// Path rules grouped under a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRule {
    /// Host to match exactly, or `*` for every host.
    pub host: String,

    /// Path rules for this host.
    #[serde(default)]
    pub paths: Vec<PathRule>,
}

/// The full redaction rule tree.
///
/// Declaration order carries no precedence: every matching host/path
/// combination contributes its rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RedactionConfig {
    hosts: Vec<HostRule>,
}

impl RedactionConfig {
    #[must_use]
    pub fn new(hosts: Vec<HostRule>) -> Self {
        Self { hosts }
    }

    #[must_use]
    pub fn hosts(&self) -> &[HostRule] {
        &self.hosts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Total number of rules across all hosts and paths.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.hosts
            .iter()
            .flat_map(|host| &host.paths)
            .map(|path| path.rules.len())
            .sum()
    }
}

impl FromIterator<HostRule> for RedactionConfig {
    fn from_iter<I: IntoIterator<Item = HostRule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A path entry of a whitelist host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitelistPath {
    /// Path to match, or `*` for every path.
    pub path: String,

    /// Treat `path` as a prefix.
    #[serde(default)]
    pub glob: bool,
}

/// A whitelisted host, optionally narrowed to a set of paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitelistHost {
    /// Host to match, or `*` for every host.
    pub host: String,

    /// Also match subdomains of `host`.
    #[serde(default)]
    pub glob: bool,

    /// Paths to match. Empty means every path.
    #[serde(default)]
    pub paths: Vec<WhitelistPath>,
}

/// Top-level settings document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Redaction rule tree.
    #[serde(default)]
    pub redactions: RedactionConfig,

    /// Hosts whose traffic should be logged. Empty means all traffic.
    #[serde(default)]
    pub whitelist: Vec<WhitelistHost>,

    /// Engine behavior switches.
    #[serde(default)]
    pub options: RedactionOptions,
}
