use async_trait::async_trait;
use common::config::NewsConfig;
use common::{Article, BrieflyResult, NewsSource};
use reqwest::Client;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::models::parse_articles;
use crate::normalize::normalize;
use crate::query::{NewsQuery, QueryBuilder};

pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Client for the news provider, reached through a proxy.
#[derive(Clone)]
pub struct NewsApiClient {
    client: Client,
    proxy_base: Option<String>,
    api_key: Option<String>,
    builder: QueryBuilder,
}

impl NewsApiClient {
    pub fn new(config: &NewsConfig) -> Self {
        Self {
            client: Client::new(),
            proxy_base: config.proxy_base.clone(),
            api_key: config.api_key.clone(),
            builder: QueryBuilder::new(&config.language, config.page_size),
        }
    }

    /// Sends one request. Anything short of a transport failure degrades to
    /// an empty list.
    pub async fn fetch(&self, query: &NewsQuery) -> BrieflyResult<Vec<Article>> {
        let Some(base) = self.proxy_base.as_deref() else {
            warn!("NEWS_PROXY_BASE is not set. Returning empty article list.");
            return Ok(Vec::new());
        };

        let url = match query.url(base) {
            Ok(url) => url,
            Err(e) => {
                warn!("{}. Returning empty article list.", e);
                return Ok(Vec::new());
            }
        };

        info!("Fetching news from {}", url.path());

        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await.map_err(|e| {
            error!("News request failed: {}", e);
            e
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("News API error ({}): {}", status, body);
            return Ok(Vec::new());
        }

        let text = response.text().await?;
        let body: Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(e) => {
                warn!("Malformed news response: {}", e);
                return Ok(Vec::new());
            }
        };

        let articles = normalize(parse_articles(&body));
        info!("Fetched {} articles", articles.len());
        Ok(articles)
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    async fn fetch_news(&self, topic: &str, search_term: &str) -> BrieflyResult<Vec<Article>> {
        let query = self.builder.build(topic, search_term);
        self.fetch(&query).await
    }

    fn name(&self) -> &'static str {
        "NewsAPI"
    }
}
