use std::fmt;

use serde::{Deserialize, Serialize};

/// Browsing category selected by the user.
///
/// Topic ids outside the fixed catalogue (for example from an old preset) are
/// kept verbatim in [`Topic::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Topic {
    #[default]
    All,
    Top,
    Politics,
    World,
    Technology,
    Business,
    Science,
    Health,
    Sports,
    Environment,
    Entertainment,
    Canada,
    Other(String),
}

impl Topic {
    pub const CATALOGUE: [Topic; 12] = [
        Topic::All,
        Topic::Top,
        Topic::Politics,
        Topic::World,
        Topic::Technology,
        Topic::Business,
        Topic::Science,
        Topic::Health,
        Topic::Sports,
        Topic::Environment,
        Topic::Entertainment,
        Topic::Canada,
    ];

    pub fn parse(id: &str) -> Topic {
        Topic::CATALOGUE
            .iter()
            .find(|topic| topic.as_str() == id)
            .cloned()
            .unwrap_or_else(|| Topic::Other(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Topic::All => "all",
            Topic::Top => "top",
            Topic::Politics => "politics",
            Topic::World => "world",
            Topic::Technology => "technology",
            Topic::Business => "business",
            Topic::Science => "science",
            Topic::Health => "health",
            Topic::Sports => "sports",
            Topic::Environment => "environment",
            Topic::Entertainment => "entertainment",
            Topic::Canada => "canada",
            Topic::Other(id) => id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Topic::All => "All news",
            Topic::Top => "Top stories",
            Topic::Politics => "Politics",
            Topic::World => "World",
            Topic::Technology => "Technology",
            Topic::Business => "Business & Finance",
            Topic::Science => "Science",
            Topic::Health => "Health",
            Topic::Sports => "Sports",
            Topic::Environment => "Environment",
            Topic::Entertainment => "Entertainment",
            Topic::Canada => "Canada",
            Topic::Other(id) => id,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Topic {
    fn from(id: String) -> Self {
        Topic::parse(&id)
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> Self {
        topic.as_str().to_string()
    }
}
