//! Host and path matching shared by the redaction resolver and the whitelist.

/// Pattern that matches any host or path.
pub const ANY: &str = "*";

/// Exact host match. `*` matches every host, including URLs without one.
///
/// Hosts are compared ignoring ASCII case.
#[must_use]
pub fn host_matches(pattern: &str, host: Option<&str>) -> bool {
    if pattern == ANY {
        return true;
    }
    host.is_some_and(|host| host.eq_ignore_ascii_case(pattern))
}

/// Domain-suffix host match: the host is the pattern itself or one of its
/// subdomains. A leading `*.` in the pattern is ignored.
///
/// `api.example.com` matches `example.com`; `badexample.com` does not.
#[must_use]
pub fn host_matches_suffix(pattern: &str, host: Option<&str>) -> bool {
    if pattern == ANY {
        return true;
    }
    let Some(host) = host else {
        return false;
    };
    let domain = pattern
        .strip_prefix("*.")
        .unwrap_or(pattern)
        .to_ascii_lowercase();
    let host = host.to_ascii_lowercase();
    host == domain || host.ends_with(&format!(".{domain}"))
}

/// Path match: `*` matches everything, `glob` means prefix match, otherwise
/// the paths must be equal.
#[must_use]
pub fn path_matches(pattern: &str, glob: bool, path: &str) -> bool {
    if pattern == ANY {
        return true;
    }
    if glob {
        path.starts_with(pattern)
    } else {
        path == pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_host_matches_anything() {
        assert!(host_matches("*", Some("example.com")));
        assert!(host_matches("*", None));
        assert!(host_matches_suffix("*", None));
    }

    #[test]
    fn exact_host_match() {
        assert!(host_matches("example.com", Some("example.com")));
        assert!(host_matches("Example.COM", Some("example.com")));
        assert!(!host_matches("example.com", Some("api.example.com")));
        assert!(!host_matches("example.com", None));
    }

    #[test]
    fn suffix_host_match() {
        assert!(host_matches_suffix("example.com", Some("example.com")));
        assert!(host_matches_suffix("example.com", Some("api.example.com")));
        assert!(host_matches_suffix("example.com", Some("a.b.EXAMPLE.com")));
        assert!(host_matches_suffix("*.example.com", Some("api.example.com")));
        assert!(!host_matches_suffix("example.com", Some("badexample.com")));
        assert!(!host_matches_suffix("example.com", Some("example.org")));
        assert!(!host_matches_suffix("example.com", None));
    }

    #[test]
    fn path_matching() {
        assert!(path_matches("*", false, "/anything"));
        assert!(path_matches("/api/test", false, "/api/test"));
        assert!(!path_matches("/api/test", false, "/api/test/1"));
        assert!(path_matches("/api/", true, "/api/test/1"));
        assert!(!path_matches("/api/", true, "/other"));
    }
}
