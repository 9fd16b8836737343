//! News provider access: query routing, payload normalization and the HTTP client.

pub mod client;
pub mod models;
pub mod normalize;
pub mod query;

pub use client::NewsApiClient;
pub use models::{parse_articles, RawArticle, RawSource};
pub use normalize::{normalize, normalize_at};
pub use query::{build_query, category_for, NewsQuery, QueryBuilder};
