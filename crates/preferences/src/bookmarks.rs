use std::sync::Arc;

use common::{Article, BrieflyResult, DocumentStore};

use crate::identity::IdentityProvider;
use crate::slice::PreferenceSlice;

pub const BOOKMARKS_FIELD: &str = "articles";

/// Bookmarked article snapshots, kept in their own per-user document.
pub struct BookmarkStore {
    slice: PreferenceSlice<Vec<Article>>,
}

impl BookmarkStore {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityProvider>,
        collection: &str,
    ) -> Self {
        Self {
            slice: PreferenceSlice::new(store, identity, collection, BOOKMARKS_FIELD),
        }
    }

    pub async fn load(&self) -> BrieflyResult<Vec<Article>> {
        self.slice.load().await
    }

    pub async fn save(&self, articles: &[Article]) -> BrieflyResult<()> {
        self.slice.save(articles).await
    }
}
