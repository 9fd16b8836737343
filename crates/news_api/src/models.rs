use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    pub title: Option<String>,
    pub url: Option<String>,
    pub source: Option<RawSource>,
    pub published_at: Option<String>,
    pub url_to_image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSource {
    pub name: Option<String>,
}

/// Pulls the `articles` array out of a provider body.
///
/// A body without an `articles` array yields nothing. Entries that are not
/// article-shaped are skipped rather than failing the whole page.
pub fn parse_articles(body: &Value) -> Vec<RawArticle> {
    let Some(entries) = body.get("articles").and_then(Value::as_array) else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| RawArticle::deserialize(entry).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_array_articles_is_empty() {
        assert!(parse_articles(&json!({ "articles": "nope" })).is_empty());
        assert!(parse_articles(&json!({ "status": "error" })).is_empty());
        assert!(parse_articles(&json!(null)).is_empty());
    }

    #[test]
    fn odd_entries_are_skipped() {
        let body = json!({
            "articles": [
                null,
                { "title": 12 },
                { "title": "Kept", "url": "https://bbc.com/a", "source": { "id": null, "name": "BBC" } }
            ]
        });
        let parsed = parse_articles(&body);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].title.as_deref(), Some("Kept"));
    }
}
