use std::collections::HashMap;
use std::fmt;

use common::Article;

/// Exact (topic, search term) pair. Case-sensitive and untrimmed, so
/// `"rust "` and `"rust"` are different entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    topic: String,
    search_term: String,
}

impl CacheKey {
    pub fn new(topic: &str, search_term: &str) -> Self {
        Self {
            topic: topic.to_string(),
            search_term: search_term.to_string(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}__{}", self.topic, self.search_term)
    }
}

/// Last successful result per key, for the lifetime of the session.
///
/// No TTL and no eviction; a forced refresh skips the read but still
/// overwrites the entry once the fetch succeeds.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<CacheKey, Vec<Article>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, topic: &str, search_term: &str) -> Option<&[Article]> {
        self.entries
            .get(&CacheKey::new(topic, search_term))
            .map(Vec::as_slice)
    }

    /// Cached articles for a read, or `None` when `force_refresh` is set.
    pub fn lookup(&self, topic: &str, search_term: &str, force_refresh: bool) -> Option<&[Article]> {
        if force_refresh {
            return None;
        }
        self.get(topic, search_term)
    }

    pub fn put(&mut self, topic: &str, search_term: &str, articles: Vec<Article>) {
        self.entries.insert(CacheKey::new(topic, search_term), articles);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
