//! Hostname extraction and domain-list membership.
//!
//! Source-group filtering, paywall classification and pin matching all go
//! through [`matches_domain`], so the suffix rule lives in exactly one place.

use url::Url;

/// Returns the lowercase hostname of `url` with one leading `www.` removed.
///
/// A URL that does not parse, or that has no host, yields an empty string.
pub fn domain_of(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return String::new();
    };
    let host = parsed.host_str().unwrap_or_default();
    host.strip_prefix("www.").unwrap_or(host).to_string()
}

/// True when `domain` equals `entry` or is a subdomain of it.
///
/// `news.nytimes.com` is under `nytimes.com`; `notnytimes.com` is not.
pub fn is_same_or_subdomain(domain: &str, entry: &str) -> bool {
    if domain.is_empty() || entry.is_empty() {
        return false;
    }
    domain == entry
        || domain
            .strip_suffix(entry)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// True when the hostname of `url` matches any entry of `domains`.
pub fn matches_domain<S: AsRef<str>>(url: &str, domains: &[S]) -> bool {
    let domain = domain_of(url);
    domains
        .iter()
        .any(|entry| is_same_or_subdomain(&domain, entry.as_ref()))
}
