use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_PAGE_SIZE: u32 = 40;
pub const DEFAULT_BOOKMARKS_TABLE: &str = "bookmarks";
pub const DEFAULT_USER_PREFS_TABLE: &str = "userPrefs";
pub const DEFAULT_USER_ID_PATH: &str = ".briefly4u_user_id";

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub rest_url: String,
    pub key: String,
}

#[derive(Debug, Clone)]
pub struct NewsConfig {
    /// Base URL of the news proxy. `None` means every fetch yields nothing.
    pub proxy_base: Option<String>,
    pub api_key: Option<String>,
    pub language: String,
    pub page_size: u32,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            proxy_base: None,
            api_key: None,
            language: DEFAULT_LANGUAGE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PreferencesConfig {
    pub bookmarks_table: String,
    pub user_prefs_table: String,
    pub user_id_path: PathBuf,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            bookmarks_table: DEFAULT_BOOKMARKS_TABLE.to_string(),
            user_prefs_table: DEFAULT_USER_PREFS_TABLE.to_string(),
            user_id_path: PathBuf::from(DEFAULT_USER_ID_PATH),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub news: NewsConfig,
    pub supabase: Option<SupabaseConfig>,
    pub preferences: PreferencesConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let news = NewsConfig {
            proxy_base: non_empty_var("NEWS_PROXY_BASE"),
            api_key: non_empty_var("NEWS_API_KEY"),
            language: non_empty_var("NEWS_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            page_size: env::var("NEWS_PAGE_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
        };

        let supabase = match (non_empty_var("SUPABASE_URL"), non_empty_var("SUPABASE_SERVICE_ROLE_KEY")) {
            (Some(url), Some(key)) => {
                let rest_url = format!("{}/rest/v1", url.trim_end_matches('/'));
                Some(SupabaseConfig { url, rest_url, key })
            }
            (Some(_), None) => {
                anyhow::bail!("SUPABASE_SERVICE_ROLE_KEY must be set when SUPABASE_URL is set")
            }
            _ => None,
        };

        let preferences = PreferencesConfig {
            bookmarks_table: non_empty_var("BOOKMARKS_TABLE")
                .unwrap_or_else(|| DEFAULT_BOOKMARKS_TABLE.to_string()),
            user_prefs_table: non_empty_var("USER_PREFS_TABLE")
                .unwrap_or_else(|| DEFAULT_USER_PREFS_TABLE.to_string()),
            user_id_path: non_empty_var("BRIEFLY_USER_ID_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_USER_ID_PATH)),
        };

        Ok(Config {
            news,
            supabase,
            preferences,
        })
    }

    pub fn require_supabase(&self) -> Result<&SupabaseConfig> {
        self.supabase
            .as_ref()
            .context("SUPABASE_URL and SUPABASE_SERVICE_ROLE_KEY must be set")
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
