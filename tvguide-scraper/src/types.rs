//! Record shapes of the two JSON sources.

use tvguide_core::{EpisodeInfo, EpisodeMetadata};

use crate::bridge::{FromTagged, TaggedNode};

/// One entry of a channel's schedule response. Only lives until the
/// schedule has been normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawScheduleEntry {
    pub start_date: Option<String>,
    pub name: Option<String>,
    pub block_name: Option<String>,
    pub episode_number: Option<String>,
    pub info: Option<RawInfo>,
}

/// Nested `info` block of a schedule entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInfo {
    pub fullname: Option<String>,
    pub year: Option<String>,
}

impl RawScheduleEntry {
    /// `name`, falling back to `blockName`.
    pub fn resolved_title(&self) -> Option<&str> {
        self.name.as_deref().or(self.block_name.as_deref())
    }

    pub fn full_name(&self) -> Option<&str> {
        self.info.as_ref()?.fullname.as_deref()
    }

    pub fn year(&self) -> Option<&str> {
        self.info.as_ref()?.year.as_deref()
    }
}

impl FromTagged for RawScheduleEntry {
    fn from_tagged(node: &TaggedNode) -> Self {
        Self {
            start_date: node.field_text("startDate"),
            name: node.field_text("name"),
            block_name: node.field_text("blockName"),
            episode_number: node.field_text("episodeNumber"),
            info: node.field_record("info"),
        }
    }
}

impl FromTagged for RawInfo {
    fn from_tagged(node: &TaggedNode) -> Self {
        Self {
            fullname: node.field_text("fullname"),
            year: node.field_text("year"),
        }
    }
}

impl FromTagged for EpisodeMetadata {
    fn from_tagged(node: &TaggedNode) -> Self {
        Self {
            genres: node.field_texts("genres"),
            production_co: node.field_texts("productionCo"),
            creators: node.field_texts("creators"),
            release_date: node.field_text("releaseDate"),
            summary: node.field_text("summary"),
            image: node.field_text("image"),
            content_rating: node.field_text("contentRating"),
            rating: node.field_f64("rating"),
            name: node.field_text("name"),
            episode: node.field_record("episode"),
        }
    }
}

impl FromTagged for EpisodeInfo {
    fn from_tagged(node: &TaggedNode) -> Self {
        Self {
            season: node.field_u32("season"),
            ep_num: node.field_u32("epNum"),
            name: node.field_text("name"),
            summary: node.field_text("summary"),
        }
    }
}
