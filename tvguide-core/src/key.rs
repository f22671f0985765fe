use std::fmt;

use serde::{Deserialize, Serialize};

/// Metadata lookup key.
///
/// The key is the full metadata query URL for a programme, so it doubles as
/// the cache key and the address to fetch. Equal inputs always produce equal
/// keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupKey(String);

impl LookupKey {
    /// Build the key from the channel's metadata base URL, the programme
    /// name and the optional year and episode number.
    pub fn build(base_url: &str, name: &str, year: Option<&str>, episode: Option<&str>) -> Self {
        let base = base_url.trim();
        let separator = if base.contains('?') { '&' } else { '?' };

        let mut url = format!("{base}{separator}name={}", urlencoding::encode(name));
        if let Some(year) = year {
            url.push_str("&year=");
            url.push_str(&urlencoding::encode(year.trim()));
        }
        if let Some(episode) = episode {
            url.push_str("&episode=");
            url.push_str(&urlencoding::encode(episode.trim()));
        }
        Self(url)
    }

    /// The URL to query for this key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for LookupKey {
    fn from(url: String) -> Self {
        Self(url)
    }
}
