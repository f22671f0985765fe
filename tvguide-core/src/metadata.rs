use serde::{Deserialize, Serialize};

/// Descriptive metadata for a programme, as returned by the metadata source.
///
/// Field names serialize in the source's camelCase so the cache file has the
/// same shape as a metadata response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeMetadata {
    #[serde(default)]
    pub genres: Vec<String>,
    /// Producers / production companies
    #[serde(default)]
    pub production_co: Vec<String>,
    /// Writers / creators
    #[serde(default)]
    pub creators: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_rating: Option<String>,
    /// Rating out of 10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<EpisodeInfo>,
}

/// Episode-level details nested in [`EpisodeMetadata`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeInfo {
    /// 1-based season number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    /// 1-based episode number within the season
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ep_num: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}
