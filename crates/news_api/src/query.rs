//! Routing of a (topic, search term) pair to one of the two provider endpoints.
//!
//! The full-text endpoint has no category semantics, so free-text searches and
//! the "all" topic go there; every other topic browses category headlines.

use common::config::{DEFAULT_LANGUAGE, DEFAULT_PAGE_SIZE};
use common::{BrieflyError, BrieflyResult};
use url::Url;

pub const EVERYTHING_PATH: &str = "/v2/everything";
pub const TOP_HEADLINES_PATH: &str = "/v2/top-headlines";
pub const FALLBACK_QUERY: &str = "news";
pub const DEFAULT_CATEGORY: &str = "general";
pub const SORT_BY_RECENCY: &str = "publishedAt";

const ALL_TOPIC: &str = "all";
const COUNTRY_TOPIC: (&str, &str) = ("canada", "ca");

/// Provider category for a topic id. Topics outside the table browse `general`.
pub fn category_for(topic: &str) -> &'static str {
    match topic {
        "technology" => "technology",
        "business" => "business",
        "science" => "science",
        "health" => "health",
        "sports" => "sports",
        "entertainment" => "entertainment",
        _ => DEFAULT_CATEGORY,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsQuery {
    /// Full-text search, newest first.
    Everything {
        language: String,
        page_size: u32,
        query: String,
    },
    /// Category headlines with an optional country and text refinement.
    TopHeadlines {
        language: String,
        category: String,
        country: Option<String>,
        query: Option<String>,
    },
}

impl NewsQuery {
    pub fn path(&self) -> &'static str {
        match self {
            NewsQuery::Everything { .. } => EVERYTHING_PATH,
            NewsQuery::TopHeadlines { .. } => TOP_HEADLINES_PATH,
        }
    }

    /// Query string parameters in the order they are sent.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            NewsQuery::Everything {
                language,
                page_size,
                query,
            } => vec![
                ("language", language.clone()),
                ("sortBy", SORT_BY_RECENCY.to_string()),
                ("pageSize", page_size.to_string()),
                ("q", query.clone()),
            ],
            NewsQuery::TopHeadlines {
                language,
                category,
                country,
                query,
            } => {
                let mut params = vec![("language", language.clone())];
                if let Some(country) = country {
                    params.push(("country", country.clone()));
                }
                params.push(("category", category.clone()));
                if let Some(query) = query {
                    params.push(("q", query.clone()));
                }
                params
            }
        }
    }

    /// Resolves the endpoint against the proxy base and appends the parameters.
    pub fn url(&self, base: &str) -> BrieflyResult<Url> {
        let base = Url::parse(base)
            .map_err(|e| BrieflyError::Parse(format!("Invalid news proxy base {}: {}", base, e)))?;
        let mut url = base
            .join(self.path())
            .map_err(|e| BrieflyError::Parse(format!("Invalid news endpoint: {}", e)))?;
        url.query_pairs_mut().extend_pairs(self.params());
        Ok(url)
    }
}

#[derive(Debug, Clone)]
pub struct QueryBuilder {
    language: String,
    page_size: u32,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE, DEFAULT_PAGE_SIZE)
    }
}

impl QueryBuilder {
    pub fn new(language: &str, page_size: u32) -> Self {
        Self {
            language: language.to_string(),
            page_size,
        }
    }

    pub fn build(&self, topic: &str, search_term: &str) -> NewsQuery {
        let search = search_term.trim();
        let has_search = !search.is_empty();

        if has_search || topic == ALL_TOPIC {
            let query = if has_search { search } else { FALLBACK_QUERY };
            return NewsQuery::Everything {
                language: self.language.clone(),
                page_size: self.page_size,
                query: query.to_string(),
            };
        }

        let (country_topic, country_code) = COUNTRY_TOPIC;
        NewsQuery::TopHeadlines {
            language: self.language.clone(),
            category: category_for(topic).to_string(),
            country: (topic == country_topic).then(|| country_code.to_string()),
            query: has_search.then(|| search.to_string()),
        }
    }
}

/// [`QueryBuilder::build`] with the default language and page size.
pub fn build_query(topic: &str, search_term: &str) -> NewsQuery {
    QueryBuilder::default().build(topic, search_term)
}
