use common::{Article, SourceGroup};
use dashboard::toggle::{toggle_bookmark, toggle_pin};
use dashboard::{apply_filters, FilterState};
use pretty_assertions::assert_eq;

fn article(title: &str, url: &str, is_paywalled: bool) -> Article {
    Article {
        id: format!("1-{}", title),
        title: title.to_string(),
        url: url.to_string(),
        source: "Source".to_string(),
        published_at: "2024-05-01T10:00:00Z".to_string(),
        is_paywalled,
        image_url: None,
    }
}

fn titles(articles: &[Article]) -> Vec<&str> {
    articles.iter().map(|a| a.title.as_str()).collect()
}

fn sample() -> Vec<Article> {
    vec![
        article("A", "https://www.npr.org/a", false),
        article("B", "https://www.bbc.com/b", false),
        article("C", "https://theintercept.com/c", false),
        article("D", "https://www.bbc.com/d", false),
        article("E", "https://www.nytimes.com/e", true),
    ]
}

#[test]
fn pinned_first_and_stable_within_partitions() {
    let filters = FilterState {
        pinned_domains: vec!["bbc.com".to_string()],
        ..FilterState::default()
    };

    let result = apply_filters(&sample()[..4], &filters);
    assert_eq!(titles(&result), vec!["B", "D", "A", "C"]);
}

#[test]
fn default_filters_are_a_no_op() {
    let articles = sample();
    assert_eq!(apply_filters(&articles, &FilterState::default()), articles);
}

#[test]
fn source_group_restricts_to_its_list() {
    let big = FilterState {
        source_group: SourceGroup::Big,
        ..FilterState::default()
    };
    assert_eq!(titles(&apply_filters(&sample(), &big)), vec!["B", "D", "E"]);

    let independent = FilterState {
        source_group: SourceGroup::Independent,
        ..FilterState::default()
    };
    assert_eq!(titles(&apply_filters(&sample(), &independent)), vec!["A", "C"]);
}

#[test]
fn hide_paywalled_drops_flagged_articles() {
    let filters = FilterState {
        hide_paywalled: true,
        ..FilterState::default()
    };
    assert_eq!(titles(&apply_filters(&sample(), &filters)), vec!["A", "B", "C", "D"]);
}

#[test]
fn steps_compose_in_order() {
    let filters = FilterState {
        source_group: SourceGroup::Big,
        hide_paywalled: true,
        pinned_domains: vec!["nytimes.com".to_string(), "bbc.com".to_string()],
    };
    assert_eq!(titles(&apply_filters(&sample(), &filters)), vec!["B", "D"]);
}

#[test]
fn reapplying_is_idempotent() {
    let filter_states = [
        FilterState::default(),
        FilterState {
            source_group: SourceGroup::Big,
            hide_paywalled: true,
            pinned_domains: vec!["bbc.com".to_string()],
        },
        FilterState {
            source_group: SourceGroup::Independent,
            hide_paywalled: false,
            pinned_domains: vec!["theintercept.com".to_string(), "npr.org".to_string()],
        },
    ];

    for filters in &filter_states {
        let once = apply_filters(&sample(), filters);
        let twice = apply_filters(&once, filters);
        assert_eq!(twice, once);
    }
}

#[test]
fn pin_match_ignores_lookalike_domains() {
    let articles = vec![
        article("Lookalike", "https://notbbc.com/x", false),
        article("Real", "https://news.bbc.com/y", false),
    ];
    let filters = FilterState {
        pinned_domains: vec!["bbc.com".to_string()],
        ..FilterState::default()
    };
    assert_eq!(titles(&apply_filters(&articles, &filters)), vec!["Real", "Lookalike"]);
}

#[test]
fn bookmark_toggle_is_its_own_inverse() {
    let original = vec![article("A", "https://bbc.com/a", false)];
    let other = article("B", "https://bbc.com/b", false);

    let added = toggle_bookmark(&original, &other);
    assert_eq!(titles(&added), vec!["A", "B"]);
    assert_eq!(toggle_bookmark(&added, &other), original);

    // Identity is the url, not the render id.
    let mut refetched = original[0].clone();
    refetched.id = "2-0-https://bbc.com/a".to_string();
    assert!(toggle_bookmark(&original, &refetched).is_empty());
}

#[test]
fn pin_toggle_keeps_pin_order() {
    let pinned = vec!["bbc.com".to_string(), "npr.org".to_string()];
    let added = toggle_pin(&pinned, "cbc.ca");
    assert_eq!(added, vec!["bbc.com", "npr.org", "cbc.ca"]);
    assert_eq!(toggle_pin(&added, "npr.org"), vec!["bbc.com", "cbc.ca"]);
    assert_eq!(toggle_pin(&toggle_pin(&pinned, "x.org"), "x.org"), pinned);
}

#[test]
fn pin_toggle_on_a_subdomain_releases_the_covering_parent() {
    let pinned = vec!["npr.org".to_string(), "bbc.com".to_string()];
    assert_eq!(toggle_pin(&pinned, "news.bbc.com"), vec!["npr.org"]);

    let pinned = vec!["news.bbc.com".to_string()];
    assert_eq!(toggle_pin(&pinned, "bbc.com"), vec!["news.bbc.com", "bbc.com"]);
}
