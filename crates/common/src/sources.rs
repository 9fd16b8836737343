use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::matches_domain;

pub const BIG_OUTLET_DOMAINS: &[&str] = &[
    "bbc.com",
    "bbc.co.uk",
    "reuters.com",
    "apnews.com",
    "cnn.com",
    "foxnews.com",
    "theguardian.com",
    "nytimes.com",
    "washingtonpost.com",
    "aljazeera.com",
    "hindustantimes.com",
    "cbc.ca",
    "globalnews.ca",
    "bloomberg.com",
    "ft.com",
    "wsj.com",
];

// Independent, low-bias, non-profit and alternative outlets.
pub const INDEPENDENT_DOMAINS: &[&str] = &[
    "theintercept.com",
    "reason.com",
    "jacobin.com",
    "zerohedge.com",
    "commondreams.org",
    "theepochtimes.com",
    "truthout.org",
    "mintpressnews.com",
    "thedailybeast.com",
    "apnews.com",
    "reuters.com",
    "propublica.org",
    "npr.org",
    "pbs.org",
    "haaretz.com",
    "electronicintifada.net",
    "mondoweiss.net",
    "maannews.com",
    "palestinechronicle.com",
    "english.pnn.ps",
    "972mag.com",
    "middleeastmonitor.com",
    "imeu.org",
    "wrmea.org",
    "fmep.org",
];

/// Filter bucket backed by the static outlet lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceGroup {
    #[default]
    All,
    Big,
    Independent,
}

impl SourceGroup {
    /// The domain list this group restricts to, or `None` for [`SourceGroup::All`].
    pub fn domains(self) -> Option<&'static [&'static str]> {
        match self {
            SourceGroup::All => None,
            SourceGroup::Big => Some(BIG_OUTLET_DOMAINS),
            SourceGroup::Independent => Some(INDEPENDENT_DOMAINS),
        }
    }

    pub fn admits(self, url: &str) -> bool {
        self.domains()
            .map_or(true, |domains| matches_domain(url, domains))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SourceGroup::All => "all",
            SourceGroup::Big => "big",
            SourceGroup::Independent => "independent",
        }
    }
}

impl fmt::Display for SourceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(SourceGroup::All),
            "big" => Ok(SourceGroup::Big),
            "independent" => Ok(SourceGroup::Independent),
            other => Err(format!("Unknown source group: {}", other)),
        }
    }
}
