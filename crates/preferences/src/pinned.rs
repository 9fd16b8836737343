use std::sync::Arc;

use common::{BrieflyResult, DocumentStore};

use crate::identity::IdentityProvider;
use crate::slice::PreferenceSlice;

pub const PINNED_SOURCES_FIELD: &str = "pinnedSources";

/// Pinned hostnames, in pin order. Shares the user-prefs document with presets.
pub struct PinnedSourceStore {
    slice: PreferenceSlice<Vec<String>>,
}

impl PinnedSourceStore {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityProvider>,
        collection: &str,
    ) -> Self {
        Self {
            slice: PreferenceSlice::new(store, identity, collection, PINNED_SOURCES_FIELD),
        }
    }

    pub async fn load(&self) -> BrieflyResult<Vec<String>> {
        self.slice.load().await
    }

    pub async fn save(&self, domains: &[String]) -> BrieflyResult<()> {
        self.slice.save(domains).await
    }
}
