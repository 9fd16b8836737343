use std::sync::Arc;

use common::{domain_of, matches_domain, Article, BrieflyResult, NewsSource, Preset, SourceGroup, Topic};
use preferences::Preferences;
use time::OffsetDateTime;
use tracing::{error, info, warn};

use crate::cache::QueryCache;
use crate::filter::{self, FilterState};
use crate::toggle;

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load news. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceDomain {
    Bookmarks,
    PinnedSources,
    Presets,
}

/// Whether local preference state is known to match the remote copy.
///
/// A failed save leaves the optimistic local change in place and marks the
/// domain unsynced until its next successful save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SyncStatus {
    #[default]
    Synced,
    Unsynced(String),
}

#[derive(Debug, Default)]
struct SyncState {
    bookmarks: SyncStatus,
    pinned_sources: SyncStatus,
    presets: SyncStatus,
}

impl SyncState {
    fn slot(&mut self, domain: PreferenceDomain) -> &mut SyncStatus {
        match domain {
            PreferenceDomain::Bookmarks => &mut self.bookmarks,
            PreferenceDomain::PinnedSources => &mut self.pinned_sources,
            PreferenceDomain::Presets => &mut self.presets,
        }
    }
}

/// UI session state plus the command handlers that mutate it.
///
/// Handlers apply user actions to local state first, then persist through
/// the matching preference adapter.
pub struct Session {
    news: Arc<dyn NewsSource>,
    preferences: Preferences,
    cache: QueryCache,

    topic: Topic,
    search_term: String,
    source_group: SourceGroup,
    hide_paywalled: bool,

    articles: Vec<Article>,
    bookmarks: Vec<Article>,
    pinned_sources: Vec<String>,
    presets: Vec<Preset>,

    loading: bool,
    saving_bookmarks: bool,
    preferences_loaded: bool,
    error: Option<String>,
    sync: SyncState,
}

impl Session {
    pub fn new(news: Arc<dyn NewsSource>, preferences: Preferences) -> Self {
        Self::with_cache(news, preferences, QueryCache::new())
    }

    pub fn with_cache(news: Arc<dyn NewsSource>, preferences: Preferences, cache: QueryCache) -> Self {
        Self {
            news,
            preferences,
            cache,
            topic: Topic::default(),
            search_term: String::new(),
            source_group: SourceGroup::default(),
            hide_paywalled: false,
            articles: Vec::new(),
            bookmarks: Vec::new(),
            pinned_sources: Vec::new(),
            presets: Vec::new(),
            loading: false,
            saving_bookmarks: false,
            preferences_loaded: false,
            error: None,
            sync: SyncState::default(),
        }
    }

    /// Loads bookmarks, presets and pinned sources concurrently.
    ///
    /// Each domain that loads is applied; one that fails keeps its empty
    /// default. The first failure is returned once all three have finished.
    pub async fn load_preferences(&mut self) -> BrieflyResult<()> {
        let (bookmarks, presets, pinned) = tokio::join!(
            self.preferences.bookmarks.load(),
            self.preferences.presets.load(),
            self.preferences.pinned.load(),
        );
        self.preferences_loaded = true;

        let mut first_error = None;
        match bookmarks {
            Ok(bookmarks) => self.bookmarks = bookmarks,
            Err(e) => first_error = first_error.or(Some(e)),
        }
        match presets {
            Ok(presets) => self.presets = presets,
            Err(e) => first_error = first_error.or(Some(e)),
        }
        match pinned {
            Ok(pinned) => self.pinned_sources = pinned,
            Err(e) => first_error = first_error.or(Some(e)),
        }

        match first_error {
            Some(e) => {
                warn!("Error loading preferences: {}", e);
                Err(e)
            }
            None => {
                info!(
                    "Loaded {} bookmarks, {} presets, {} pinned sources",
                    self.bookmarks.len(),
                    self.presets.len(),
                    self.pinned_sources.len()
                );
                Ok(())
            }
        }
    }

    /// Replaces the working set for the current topic and search term,
    /// serving from the cache unless `force_refresh` is set.
    pub async fn load_news(&mut self, force_refresh: bool) -> BrieflyResult<()> {
        let topic = self.topic.as_str().to_string();
        if let Some(cached) = self.cache.lookup(&topic, &self.search_term, force_refresh) {
            self.articles = cached.to_vec();
            return Ok(());
        }

        self.loading = true;
        self.error = None;
        let result = self.news.fetch_news(&topic, &self.search_term).await;
        self.loading = false;

        match result {
            Ok(articles) => {
                self.cache.put(&topic, &self.search_term, articles.clone());
                self.articles = articles;
                Ok(())
            }
            Err(e) => {
                error!("{} fetch failed: {}", self.news.name(), e);
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    pub fn select_topic(&mut self, topic: Topic) {
        self.topic = topic;
    }

    pub fn set_search_term(&mut self, search_term: &str) {
        self.search_term = search_term.to_string();
    }

    pub fn set_source_group(&mut self, source_group: SourceGroup) {
        self.source_group = source_group;
    }

    pub fn set_hide_paywalled(&mut self, hide: bool) {
        self.hide_paywalled = hide;
    }

    /// Flips the bookmark for `article` and persists the whole set.
    /// Returns whether the article is now bookmarked.
    pub async fn toggle_bookmark(&mut self, article: &Article) -> BrieflyResult<bool> {
        self.bookmarks = toggle::toggle_bookmark(&self.bookmarks, article);
        let bookmarked = self.is_bookmarked(article);

        self.saving_bookmarks = true;
        let result = self.preferences.bookmarks.save(&self.bookmarks).await;
        self.saving_bookmarks = false;

        self.record_sync(PreferenceDomain::Bookmarks, result)?;
        Ok(bookmarked)
    }

    /// Flips whether articles on the domain of `url` show as pinned.
    /// `None` when the url has no usable domain, in which case nothing changes.
    pub async fn toggle_pin(&mut self, url: &str) -> BrieflyResult<Option<bool>> {
        let domain = domain_of(url);
        if domain.is_empty() {
            return Ok(None);
        }

        self.pinned_sources = toggle::toggle_pin(&self.pinned_sources, &domain);
        let pinned = matches_domain(url, &self.pinned_sources);

        let result = self.preferences.pinned.save(&self.pinned_sources).await;
        self.record_sync(PreferenceDomain::PinnedSources, result)?;
        Ok(Some(pinned))
    }

    /// Adopts the preset's topic and search term. The caller decides when to load.
    pub fn apply_preset(&mut self, preset: &Preset) {
        self.topic = Topic::parse(&preset.topic);
        self.search_term = preset.search_term.clone();
    }

    /// Saves the current topic and search term under `name`.
    /// A blank name does nothing and returns `None`.
    pub async fn save_current_as_preset(&mut self, name: &str) -> BrieflyResult<Option<Preset>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let preset = Preset {
            id: self.next_preset_id(),
            name: name.to_string(),
            topic: self.topic.as_str().to_string(),
            search_term: self.search_term.clone(),
        };
        self.presets.push(preset.clone());

        let result = self.preferences.presets.save(&self.presets).await;
        self.record_sync(PreferenceDomain::Presets, result)?;
        Ok(Some(preset))
    }

    /// Removes the preset with `id`; returns whether one was removed.
    pub async fn delete_preset(&mut self, id: &str) -> BrieflyResult<bool> {
        let before = self.presets.len();
        self.presets.retain(|p| p.id != id);
        let removed = self.presets.len() != before;

        let result = self.preferences.presets.save(&self.presets).await;
        self.record_sync(PreferenceDomain::Presets, result)?;
        Ok(removed)
    }

    pub fn filters(&self) -> FilterState {
        FilterState {
            source_group: self.source_group,
            hide_paywalled: self.hide_paywalled,
            pinned_domains: self.pinned_sources.clone(),
        }
    }

    pub fn displayed_articles(&self) -> Vec<Article> {
        filter::apply_filters(&self.articles, &self.filters())
    }

    pub fn is_bookmarked(&self, article: &Article) -> bool {
        self.bookmarks.iter().any(|b| b.url == article.url)
    }

    pub fn is_pinned(&self, article: &Article) -> bool {
        filter::is_pinned(article, &self.pinned_sources)
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn source_group(&self) -> SourceGroup {
        self.source_group
    }

    pub fn hide_paywalled(&self) -> bool {
        self.hide_paywalled
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn bookmarks(&self) -> &[Article] {
        &self.bookmarks
    }

    pub fn pinned_sources(&self) -> &[String] {
        &self.pinned_sources
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn preset(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving_bookmarks(&self) -> bool {
        self.saving_bookmarks
    }

    pub fn preferences_loaded(&self) -> bool {
        self.preferences_loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn sync_status(&self, domain: PreferenceDomain) -> &SyncStatus {
        match domain {
            PreferenceDomain::Bookmarks => &self.sync.bookmarks,
            PreferenceDomain::PinnedSources => &self.sync.pinned_sources,
            PreferenceDomain::Presets => &self.sync.presets,
        }
    }

    fn record_sync(&mut self, domain: PreferenceDomain, result: BrieflyResult<()>) -> BrieflyResult<()> {
        let slot = self.sync.slot(domain);
        match &result {
            Ok(()) => *slot = SyncStatus::Synced,
            Err(e) => {
                warn!("{:?} left unsynced: {}", domain, e);
                *slot = SyncStatus::Unsynced(e.to_string());
            }
        }
        result
    }

    // Millisecond timestamps, bumped past the newest existing id so that two
    // presets saved within the same millisecond stay distinct.
    fn next_preset_id(&self) -> String {
        let now_ms = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let newest = self
            .presets
            .iter()
            .filter_map(|p| p.id.parse::<i128>().ok())
            .max();
        match newest {
            Some(newest) if newest >= now_ms => (newest + 1).to_string(),
            _ => now_ms.to_string(),
        }
    }
}
