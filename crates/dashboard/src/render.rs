use std::fmt::Write;

use common::{Article, Topic};

use crate::session::{PreferenceDomain, Session, SyncStatus};

pub fn articles(session: &Session) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "[{}] search={:?} group={} hide-paywalled={}",
        session.topic().label(),
        session.search_term(),
        session.source_group(),
        session.hide_paywalled()
    );
    if let Some(error) = session.error() {
        let _ = writeln!(out, "! {}", error);
    }

    let displayed = session.displayed_articles();
    if displayed.is_empty() {
        let _ = writeln!(out, "(no articles)");
    }
    for (index, article) in displayed.iter().enumerate() {
        let _ = writeln!(out, "{}", article_line(session, index + 1, article));
    }
    out.push_str(&sync_warnings(session));
    out
}

pub fn bookmarks(session: &Session) -> String {
    let mut out = String::new();
    if session.bookmarks().is_empty() {
        let _ = writeln!(out, "(no bookmarks)");
    }
    for (index, article) in session.bookmarks().iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {} | {} <{}>", index + 1, article.title, article.source, article.url);
    }
    out
}

pub fn presets(session: &Session) -> String {
    let mut out = String::new();
    if session.presets().is_empty() {
        let _ = writeln!(out, "(no presets)");
    }
    for preset in session.presets() {
        let _ = writeln!(
            out,
            "{} {:?}: topic={} search={:?}",
            preset.id, preset.name, preset.topic, preset.search_term
        );
    }
    out
}

pub fn topics() -> String {
    let mut out = String::new();
    for topic in Topic::CATALOGUE {
        let _ = writeln!(out, "{:<14} {}", topic.as_str(), topic.label());
    }
    out
}

fn article_line(session: &Session, position: usize, article: &Article) -> String {
    let marks = format!(
        "{}{}{}",
        if session.is_pinned(article) { "^" } else { " " },
        if session.is_bookmarked(article) { "*" } else { " " },
        if article.is_paywalled { "$" } else { " " },
    );
    format!(
        "{:>3}. {} {} | {} | {}",
        position, marks, article.title, article.source, article.published_at
    )
}

fn sync_warnings(session: &Session) -> String {
    let mut out = String::new();
    for domain in [
        PreferenceDomain::Bookmarks,
        PreferenceDomain::PinnedSources,
        PreferenceDomain::Presets,
    ] {
        if let SyncStatus::Unsynced(reason) = session.sync_status(domain) {
            let _ = writeln!(out, "! {:?} not saved: {}", domain, reason);
        }
    }
    out
}
