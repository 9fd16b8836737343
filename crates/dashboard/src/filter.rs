//! The displayed list: source-group restriction, paywall hiding, then
//! pinned-first ordering.

use common::{matches_domain, Article, SourceGroup};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub source_group: SourceGroup,
    pub hide_paywalled: bool,
    pub pinned_domains: Vec<String>,
}

pub fn is_pinned(article: &Article, pinned_domains: &[String]) -> bool {
    matches_domain(&article.url, pinned_domains)
}

/// Pure and stable: relative order is kept inside the pinned and unpinned
/// partitions, and applying it twice gives the same list as once.
pub fn apply_filters(articles: &[Article], filters: &FilterState) -> Vec<Article> {
    let (pinned, rest): (Vec<&Article>, Vec<&Article>) = articles
        .iter()
        .filter(|article| filters.source_group.admits(&article.url))
        .filter(|article| !(filters.hide_paywalled && article.is_paywalled))
        .partition(|article| is_pinned(article, &filters.pinned_domains));

    pinned.into_iter().chain(rest).cloned().collect()
}
