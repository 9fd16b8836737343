use std::sync::Arc;

use anyhow::Result;
use common::{Config, DocumentStore, InMemoryDocumentStore, NewsSource, SupabaseDocumentStore};
use dashboard::{command, render, Reply, Session};
use news_api::NewsApiClient;
use preferences::{LocalIdentity, Preferences};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv::dotenv();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from_env()?;

    let store: Arc<dyn DocumentStore> = match config.require_supabase() {
        Ok(supabase) => Arc::new(SupabaseDocumentStore::from_config(supabase)),
        Err(e) => {
            warn!("{}; preferences will only last for this session", e);
            Arc::new(InMemoryDocumentStore::new())
        }
    };
    let identity = Arc::new(LocalIdentity::load_or_create(&config.preferences.user_id_path)?);
    let news: Arc<dyn NewsSource> = Arc::new(NewsApiClient::new(&config.news));
    info!("Using {} news and {} preferences", news.name(), store.name());

    let preferences = Preferences::new(store, identity, &config.preferences);
    let mut session = Session::new(news, preferences);

    // Preference failures are already logged; the session keeps empty defaults.
    let _ = session.load_preferences().await;
    let _ = session.load_news(false).await;
    print!("{}", render::articles(&session));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match command::execute(&mut session, command).await {
            Ok(Reply::Quit) => break,
            Ok(Reply::Articles) => print!("{}", render::articles(&session)),
            Ok(Reply::Bookmarks) => print!("{}", render::bookmarks(&session)),
            Ok(Reply::Presets) => print!("{}", render::presets(&session)),
            Ok(Reply::Topics) => print!("{}", render::topics()),
            Ok(Reply::Help) => println!("{}", command::HELP),
            Ok(Reply::Message(message)) => println!("{}", message),
            // Fetch failures leave a message on the session; save failures
            // leave an unsynced marker. Both show up in the article view.
            Err(_) => print!("{}", render::articles(&session)),
        }
    }

    Ok(())
}
