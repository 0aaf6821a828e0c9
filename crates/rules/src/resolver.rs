use httpscrub_core::{RedactionConfig, RedactionRule};
use tracing::debug;
use url::Url;

use crate::matcher::{host_matches, path_matches};

/// Collect every rule that applies to `url`.
///
/// A host entry matches when it is `*` or equals the URL host; within it, a
/// path entry matches when it is `*`, is a prefix of the URL path (`glob`),
/// or equals the URL path. Rules of all matching entries are concatenated;
/// their order carries no meaning. An unmatched URL yields an empty list.
#[must_use]
pub fn resolve(config: &RedactionConfig, url: &Url) -> Vec<RedactionRule> {
    let host = url.host_str();
    let path = url.path();

    let rules: Vec<RedactionRule> = config
        .hosts()
        .iter()
        .filter(|entry| host_matches(&entry.host, host))
        .flat_map(|entry| &entry.paths)
        .filter(|entry| path_matches(&entry.path, entry.glob, path))
        .flat_map(|entry| entry.rules.iter().cloned())
        .collect();

    debug!(
        host = host.unwrap_or_default(),
        path,
        rules = rules.len(),
        "resolved redaction rules"
    );
    rules
}
