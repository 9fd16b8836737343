use common::{is_likely_paywalled, Article};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::debug;

use crate::models::RawArticle;

pub const UNKNOWN_SOURCE: &str = "Unknown";

/// Normalizes provider records at the current instant.
pub fn normalize(records: Vec<RawArticle>) -> Vec<Article> {
    normalize_at(records, OffsetDateTime::now_utc())
}

/// Normalizes provider records as of `now`.
///
/// Records without a title or url are dropped. Provider order is kept.
pub fn normalize_at(records: Vec<RawArticle>, now: OffsetDateTime) -> Vec<Article> {
    let fetched_at_ms = now.unix_timestamp_nanos() / 1_000_000;
    let fetched_at = now.format(&Rfc3339).unwrap_or_default();
    let received = records.len();

    let articles = records
        .into_iter()
        .filter_map(|record| {
            let title = record.title.filter(|t| !t.is_empty())?;
            let url = record.url.filter(|u| !u.is_empty())?;
            Some((title, url, record.source, record.published_at, record.url_to_image))
        })
        .enumerate()
        .map(|(index, (title, url, source, published_at, image_url))| Article {
            id: format!("{}-{}-{}", fetched_at_ms, index, url),
            is_paywalled: is_likely_paywalled(&url),
            source: source
                .and_then(|s| s.name)
                .unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
            published_at: published_at.unwrap_or_else(|| fetched_at.clone()),
            image_url: image_url.filter(|i| !i.is_empty()),
            title,
            url,
        })
        .collect::<Vec<_>>();

    debug!("Normalized {} of {} provider records", articles.len(), received);
    articles
}
