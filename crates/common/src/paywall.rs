use crate::domain::matches_domain;

/// Outlets that are usually paywalled or heavily metered.
pub const PAYWALLED_DOMAINS: &[&str] = &[
    "nytimes.com",
    "wsj.com",
    "ft.com",
    "economist.com",
    "bloomberg.com",
    "theatlantic.com",
    "newyorker.com",
    "washingtonpost.com",
    "torontostar.com",
    "latimes.com",
    "thetimes.co.uk",
    "telegraph.co.uk",
    "financialpost.com",
];

/// Outlets that are usually free to read.
pub const USUALLY_FREE_DOMAINS: &[&str] = &[
    "bbc.com",
    "reuters.com",
    "apnews.com",
    "aljazeera.com",
    "hindustantimes.com",
    "cbc.ca",
    "globalnews.ca",
];

/// Best-effort guess from the static lists. Unknown domains are assumed open.
pub fn is_likely_paywalled(url: &str) -> bool {
    if matches_domain(url, PAYWALLED_DOMAINS) {
        return true;
    }
    if matches_domain(url, USUALLY_FREE_DOMAINS) {
        return false;
    }
    false
}
