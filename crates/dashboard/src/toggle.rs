use common::domain::is_same_or_subdomain;
use common::Article;

/// Adds `article` when no bookmark shares its url, otherwise removes it.
pub fn toggle_bookmark(bookmarks: &[Article], article: &Article) -> Vec<Article> {
    if bookmarks.iter().any(|b| b.url == article.url) {
        bookmarks
            .iter()
            .filter(|b| b.url != article.url)
            .cloned()
            .collect()
    } else {
        let mut next = bookmarks.to_vec();
        next.push(article.clone());
        next
    }
}

/// Unpins `domain` when any entry covers it (the entry itself or a parent
/// domain), otherwise appends it. Pin order is kept.
pub fn toggle_pin(pinned: &[String], domain: &str) -> Vec<String> {
    let covers = |entry: &String| is_same_or_subdomain(domain, entry);
    if pinned.iter().any(covers) {
        pinned.iter().filter(|entry| !covers(*entry)).cloned().collect()
    } else {
        let mut next = pinned.to_vec();
        next.push(domain.to_string());
        next
    }
}
