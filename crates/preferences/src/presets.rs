use std::sync::Arc;

use common::{BrieflyResult, DocumentStore, Preset};

use crate::identity::IdentityProvider;
use crate::slice::PreferenceSlice;

pub const PRESETS_FIELD: &str = "presets";

pub struct PresetStore {
    slice: PreferenceSlice<Vec<Preset>>,
}

impl PresetStore {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityProvider>,
        collection: &str,
    ) -> Self {
        Self {
            slice: PreferenceSlice::new(store, identity, collection, PRESETS_FIELD),
        }
    }

    pub async fn load(&self) -> BrieflyResult<Vec<Preset>> {
        self.slice.load().await
    }

    pub async fn save(&self, presets: &[Preset]) -> BrieflyResult<()> {
        self.slice.save(presets).await
    }
}
