use httpscrub_core::WhitelistHost;
use url::Url;

use crate::matcher::{host_matches, host_matches_suffix, path_matches};

/// Whether `url` is covered by any whitelist entry.
///
/// Unlike redaction resolution, a whitelist host may use suffix matching
/// (`glob`), so one entry can cover a domain and its subdomains. An entry
/// without paths covers every path of its host. An empty whitelist covers
/// nothing.
#[must_use]
pub fn is_whitelisted(whitelist: &[WhitelistHost], url: &Url) -> bool {
    let host = url.host_str();
    let path = url.path();

    whitelist.iter().any(|entry| {
        let host_ok = if entry.glob {
            host_matches_suffix(&entry.host, host)
        } else {
            host_matches(&entry.host, host)
        };
        host_ok
            && (entry.paths.is_empty()
                || entry
                    .paths
                    .iter()
                    .any(|p| path_matches(&p.path, p.glob, path)))
    })
}
