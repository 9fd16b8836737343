use news_api::query::{EVERYTHING_PATH, FALLBACK_QUERY, TOP_HEADLINES_PATH};
use news_api::{build_query, category_for, NewsQuery, QueryBuilder};
use pretty_assertions::assert_eq;

#[test]
fn all_without_search_uses_fallback_full_text() {
    let query = build_query("all", "");
    assert_eq!(
        query,
        NewsQuery::Everything {
            language: "en".to_string(),
            page_size: 40,
            query: FALLBACK_QUERY.to_string(),
        }
    );
    assert_eq!(query.path(), EVERYTHING_PATH);
}

#[test]
fn search_term_wins_over_topic_and_is_trimmed() {
    let query = build_query("technology", "  gaza  ");
    assert_eq!(
        query,
        NewsQuery::Everything {
            language: "en".to_string(),
            page_size: 40,
            query: "gaza".to_string(),
        }
    );
}

#[test]
fn whitespace_search_counts_as_empty() {
    let query = build_query("science", "   ");
    assert_eq!(query.path(), TOP_HEADLINES_PATH);
}

#[test]
fn category_topic_browses_headlines() {
    assert_eq!(
        build_query("technology", ""),
        NewsQuery::TopHeadlines {
            language: "en".to_string(),
            category: "technology".to_string(),
            country: None,
            query: None,
        }
    );
}

#[test]
fn canada_adds_country_constraint() {
    assert_eq!(
        build_query("canada", ""),
        NewsQuery::TopHeadlines {
            language: "en".to_string(),
            category: "general".to_string(),
            country: Some("ca".to_string()),
            query: None,
        }
    );
}

#[test]
fn unmapped_topics_default_to_general() {
    assert_eq!(category_for("politics"), "general");
    assert_eq!(category_for("gardening"), "general");
    assert_eq!(category_for("sports"), "sports");
}

#[test]
fn params_are_sent_in_order() {
    let params = build_query("all", "").params();
    assert_eq!(
        params,
        vec![
            ("language", "en".to_string()),
            ("sortBy", "publishedAt".to_string()),
            ("pageSize", "40".to_string()),
            ("q", "news".to_string()),
        ]
    );

    let params = build_query("canada", "").params();
    assert_eq!(
        params,
        vec![
            ("language", "en".to_string()),
            ("country", "ca".to_string()),
            ("category", "general".to_string()),
        ]
    );
}

#[test]
fn url_replaces_base_path_with_endpoint() {
    let url = build_query("health", "")
        .url("https://proxy.example.com/ignored")
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://proxy.example.com/v2/top-headlines?language=en&category=health"
    );
}

#[test]
fn custom_language_and_page_size() {
    let builder = QueryBuilder::new("fr", 10);
    let params = builder.build("all", "élection").params();
    assert_eq!(params[0], ("language", "fr".to_string()));
    assert_eq!(params[2], ("pageSize", "10".to_string()));
    assert_eq!(params[3], ("q", "élection".to_string()));
}

#[test]
fn invalid_base_is_an_error() {
    assert!(build_query("all", "").url("not a base").is_err());
}
