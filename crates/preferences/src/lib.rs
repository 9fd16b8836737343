//! Per-user preference persistence: bookmarks, pinned sources and presets.
//!
//! Bookmarks live in one document per user; pinned sources and presets share
//! a second one and are written field by field.

pub mod bookmarks;
pub mod identity;
pub mod pinned;
pub mod presets;
pub mod slice;

use std::sync::Arc;

use common::config::PreferencesConfig;
use common::DocumentStore;

pub use bookmarks::BookmarkStore;
pub use identity::{generate_user_id, IdentityProvider, LocalIdentity, StaticIdentity};
pub use pinned::PinnedSourceStore;
pub use presets::PresetStore;
pub use slice::PreferenceSlice;

/// The three adapters wired to one store and one identity.
pub struct Preferences {
    pub bookmarks: BookmarkStore,
    pub pinned: PinnedSourceStore,
    pub presets: PresetStore,
}

impl Preferences {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityProvider>,
        config: &PreferencesConfig,
    ) -> Self {
        Self {
            bookmarks: BookmarkStore::new(store.clone(), identity.clone(), &config.bookmarks_table),
            pinned: PinnedSourceStore::new(store.clone(), identity.clone(), &config.user_prefs_table),
            presets: PresetStore::new(store, identity, &config.user_prefs_table),
        }
    }
}
