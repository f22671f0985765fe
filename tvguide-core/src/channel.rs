use serde::{Deserialize, Serialize};

/// One channel from the catalog.
///
/// Owned by the catalog for the whole run and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelDescriptor {
    pub id: String,
    pub display_name: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default)]
    pub icon: String,
    /// Stream URL written to the playlist.
    pub url: String,
    /// Schedule endpoint. Channels without one get a placeholder schedule.
    #[serde(default)]
    pub schedule_url: Option<String>,
    /// Base URL for per-programme metadata queries.
    #[serde(default)]
    pub episode_query_url: Option<String>,
    /// UTC offset of the schedule's wall-clock times (e.g. "-0500").
    #[serde(default)]
    pub offset: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub group: String,
}

fn default_lang() -> String {
    "en".to_string()
}

impl ChannelDescriptor {
    /// Whether the channel has a real schedule source.
    pub fn has_schedule(&self) -> bool {
        self.schedule_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}
