use news_api::normalize::UNKNOWN_SOURCE;
use news_api::{normalize_at, RawArticle, RawSource};
use pretty_assertions::assert_eq;
use time::macros::datetime;

fn raw(title: Option<&str>, url: Option<&str>) -> RawArticle {
    RawArticle {
        title: title.map(str::to_string),
        url: url.map(str::to_string),
        source: Some(RawSource {
            name: Some("Wire".to_string()),
        }),
        published_at: Some("2024-05-01T10:00:00Z".to_string()),
        url_to_image: None,
    }
}

#[test]
fn drops_records_without_title_or_url() {
    let now = datetime!(2024-05-01 12:00 UTC);
    let records = vec![
        raw(Some("Kept"), Some("https://bbc.com/a")),
        raw(None, Some("https://bbc.com/b")),
        raw(Some("No url"), None),
        raw(Some(""), Some("https://bbc.com/c")),
        raw(Some("Empty url"), Some("")),
        raw(Some("Also kept"), Some("https://wsj.com/d")),
    ];

    let articles = normalize_at(records, now);
    let titles = articles.iter().map(|a| a.title.as_str()).collect::<Vec<_>>();
    assert_eq!(titles, vec!["Kept", "Also kept"]);
}

#[test]
fn fills_defaults_and_paywall_flag() {
    let now = datetime!(2024-05-01 12:00 UTC);
    let record = RawArticle {
        title: Some("Markets".to_string()),
        url: Some("https://www.wsj.com/markets/1".to_string()),
        source: None,
        published_at: None,
        url_to_image: Some(String::new()),
    };

    let articles = normalize_at(vec![record], now);
    let article = &articles[0];
    assert_eq!(article.source, UNKNOWN_SOURCE);
    assert_eq!(article.published_at, "2024-05-01T12:00:00Z");
    assert!(article.is_paywalled);
    assert_eq!(article.image_url, None);
}

#[test]
fn source_without_name_is_unknown() {
    let now = datetime!(2024-05-01 12:00 UTC);
    let mut record = raw(Some("T"), Some("https://bbc.com/a"));
    record.source = Some(RawSource { name: None });
    assert_eq!(normalize_at(vec![record], now)[0].source, "Unknown");
}

#[test]
fn keeps_order_and_assigns_ids() {
    let now = datetime!(2024-05-01 12:00 UTC);
    let ms = now.unix_timestamp() * 1000;
    let records = vec![
        raw(Some("Z"), Some("https://bbc.com/z")),
        raw(None, None),
        raw(Some("A"), Some("https://bbc.com/a")),
    ];

    let articles = normalize_at(records, now);
    assert_eq!(articles[0].id, format!("{}-0-https://bbc.com/z", ms));
    assert_eq!(articles[1].id, format!("{}-1-https://bbc.com/a", ms));
    assert_eq!(articles[1].source, "Wire");
    assert_eq!(articles[1].published_at, "2024-05-01T10:00:00Z");
    assert!(!articles[1].is_paywalled);
}
