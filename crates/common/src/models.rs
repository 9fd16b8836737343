use serde::{Deserialize, Serialize};

/// Canonical article shape shared by the pipeline, the cache and bookmarks.
///
/// `url` is the identity; `id` is only a render key and changes between
/// fetches of the same story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub url: String,
    pub source: String,
    pub published_at: String,
    pub is_paywalled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A named, saved (topic, search term) combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub topic: String,
    #[serde(default)]
    pub search_term: String,
}
