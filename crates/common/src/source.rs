use async_trait::async_trait;

use crate::error::BrieflyResult;
use crate::models::Article;

/// Upstream of normalized articles for a (topic, search term) pair.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetches and normalizes articles. Provider-side oddities (non-200,
    /// malformed bodies, missing configuration) come back as an empty list;
    /// only transport failures are errors.
    async fn fetch_news(&self, topic: &str, search_term: &str) -> BrieflyResult<Vec<Article>>;

    fn name(&self) -> &'static str;
}
