//! Line-oriented commands driving a [`Session`].

use common::{BrieflyResult, SourceGroup, Topic};
use tracing::info;

use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select a topic and load it.
    Topic(Topic),
    /// Set the search term (possibly empty) and load.
    Search(String),
    /// Load the current topic and search term.
    Load { force_refresh: bool },
    Group(SourceGroup),
    HidePaywalled(bool),
    /// Toggle the bookmark on the n-th displayed article (1-based).
    Bookmark(usize),
    /// Toggle the pin on the domain of the n-th displayed article (1-based).
    Pin(usize),
    SavePreset(String),
    ApplyPreset(String),
    DeletePreset(String),
    List,
    Bookmarks,
    Presets,
    Topics,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Articles,
    Bookmarks,
    Presets,
    Topics,
    Help,
    Message(String),
    Quit,
}

pub const HELP: &str = "\
commands:
  topic <id>                  select a topic and load it
  search [term]               set the search term and load
  load | refresh              load from cache | force a refetch
  group all|big|independent   restrict to a source group
  paywalled hide|show         hide or show likely paywalled articles
  bookmark <n> | pin <n>      toggle on the n-th displayed article
  preset save <name>          save topic and search as a preset
  preset apply|delete <id>    apply or delete a preset
  list | bookmarks | presets | topics | help | quit";

pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim_start();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));

    match verb {
        "topic" => match rest.trim() {
            "" => Err("topic needs an id".to_string()),
            id => Ok(Command::Topic(Topic::parse(id))),
        },
        // The search term is kept untrimmed at the end, like the input box.
        "search" => Ok(Command::Search(rest.trim_start().to_string())),
        "load" => Ok(Command::Load {
            force_refresh: false,
        }),
        "refresh" => Ok(Command::Load {
            force_refresh: true,
        }),
        "group" => rest.parse().map(Command::Group),
        "paywalled" => match rest.trim() {
            "hide" => Ok(Command::HidePaywalled(true)),
            "show" => Ok(Command::HidePaywalled(false)),
            other => Err(format!("expected hide or show, got {:?}", other)),
        },
        "bookmark" => parse_position(rest).map(Command::Bookmark),
        "pin" => parse_position(rest).map(Command::Pin),
        "preset" => {
            let (action, arg) = rest.trim().split_once(' ').unwrap_or((rest.trim(), ""));
            let arg = arg.trim().to_string();
            match action {
                "save" => Ok(Command::SavePreset(arg)),
                "apply" if !arg.is_empty() => Ok(Command::ApplyPreset(arg)),
                "delete" if !arg.is_empty() => Ok(Command::DeletePreset(arg)),
                _ => Err("usage: preset save <name> | preset apply|delete <id>".to_string()),
            }
        }
        "list" => Ok(Command::List),
        "bookmarks" => Ok(Command::Bookmarks),
        "presets" => Ok(Command::Presets),
        "topics" => Ok(Command::Topics),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command {:?}, try help", other)),
    }
}

fn parse_position(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("expected a position starting at 1, got {:?}", raw.trim())),
    }
}

/// Runs one command. Topic and preset changes reload news, as a topic
/// change does in the dashboard.
pub async fn execute(session: &mut Session, command: Command) -> BrieflyResult<Reply> {
    match command {
        Command::Topic(topic) => {
            session.select_topic(topic);
            session.load_news(false).await?;
            Ok(Reply::Articles)
        }
        Command::Search(term) => {
            session.set_search_term(&term);
            session.load_news(false).await?;
            Ok(Reply::Articles)
        }
        Command::Load { force_refresh } => {
            session.load_news(force_refresh).await?;
            Ok(Reply::Articles)
        }
        Command::Group(group) => {
            session.set_source_group(group);
            Ok(Reply::Articles)
        }
        Command::HidePaywalled(hide) => {
            session.set_hide_paywalled(hide);
            Ok(Reply::Articles)
        }
        Command::Bookmark(position) => {
            let Some(article) = displayed_at(session, position) else {
                return Ok(Reply::Message(format!("no article at {}", position)));
            };
            let bookmarked = session.toggle_bookmark(&article).await?;
            let verb = if bookmarked { "bookmarked" } else { "removed bookmark" };
            Ok(Reply::Message(format!("{}: {}", verb, article.title)))
        }
        Command::Pin(position) => {
            let Some(article) = displayed_at(session, position) else {
                return Ok(Reply::Message(format!("no article at {}", position)));
            };
            match session.toggle_pin(&article.url).await? {
                Some(_) => Ok(Reply::Articles),
                None => Ok(Reply::Message(format!("cannot pin {}", article.url))),
            }
        }
        Command::SavePreset(name) => match session.save_current_as_preset(&name).await? {
            Some(preset) => {
                info!("Saved preset {} ({})", preset.name, preset.id);
                Ok(Reply::Presets)
            }
            None => Ok(Reply::Message("preset name is empty".to_string())),
        },
        Command::ApplyPreset(id) => {
            let Some(preset) = session.preset(&id).cloned() else {
                return Ok(Reply::Message(format!("no preset {}", id)));
            };
            session.apply_preset(&preset);
            session.load_news(false).await?;
            Ok(Reply::Articles)
        }
        Command::DeletePreset(id) => {
            if session.delete_preset(&id).await? {
                Ok(Reply::Presets)
            } else {
                Ok(Reply::Message(format!("no preset {}", id)))
            }
        }
        Command::List => Ok(Reply::Articles),
        Command::Bookmarks => Ok(Reply::Bookmarks),
        Command::Presets => Ok(Reply::Presets),
        Command::Topics => Ok(Reply::Topics),
        Command::Help => Ok(Reply::Help),
        Command::Quit => Ok(Reply::Quit),
    }
}

fn displayed_at(session: &Session, position: usize) -> Option<common::Article> {
    let index = position.checked_sub(1)?;
    session.displayed_articles().into_iter().nth(index)
}
