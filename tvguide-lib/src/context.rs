//! State threaded through one pipeline run.

use chrono::NaiveDate;
use tvguide_core::{ChannelDescriptor, GuideDocument, GuideProgramme, ProgramEntry};

use crate::cache::EpisodeCache;
use crate::pipeline::RunReport;
use crate::settings::Settings;

/// A channel's schedule after fetching.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelSchedule {
    /// Normalized entries from the channel's schedule source
    Scheduled(Vec<ProgramEntry>),
    /// Generated blocks for a channel with no schedule source. These skip
    /// enrichment and assembly.
    Placeholder(Vec<GuideProgramme>),
    /// The schedule source failed or returned nothing
    Unavailable,
}

impl ChannelSchedule {
    pub fn len(&self) -> usize {
        match self {
            Self::Scheduled(entries) => entries.len(),
            Self::Placeholder(programmes) => programmes.len(),
            Self::Unavailable => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything a run owns: the catalog, per-channel schedules, the episode
/// cache, the guide being built and the running tally.
///
/// Runs are strictly sequential, so stages take `&mut PipelineContext` and
/// no part of it is shared.
pub struct PipelineContext {
    pub settings: Settings,
    pub channels: Vec<ChannelDescriptor>,
    /// One per channel, in catalog order, once schedules have been fetched
    pub schedules: Vec<ChannelSchedule>,
    pub cache: EpisodeCache,
    pub document: GuideDocument,
    pub report: RunReport,
}

impl PipelineContext {
    pub fn new(
        settings: Settings,
        channels: Vec<ChannelDescriptor>,
        cache: EpisodeCache,
        today: NaiveDate,
    ) -> Self {
        let document = GuideDocument::new(settings.generator_info(today));
        let report = RunReport {
            channels: channels.len(),
            ..RunReport::default()
        };
        Self {
            settings,
            channels,
            schedules: Vec::new(),
            cache,
            document,
            report,
        }
    }
}
