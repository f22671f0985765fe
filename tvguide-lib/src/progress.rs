use std::path::PathBuf;

/// Progress update sent while the pipeline runs.
///
/// Frontends use these to drive a spinner or status line. The pipeline never
/// waits on the receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// The catalog was loaded
    CatalogLoaded { channels: usize },

    /// Fetching the schedule for a channel
    ChannelStarted {
        /// 1-based position in the catalog
        index: usize,
        total: usize,
        display_name: String,
    },

    /// A channel's schedule is ready
    ScheduleReady {
        channel_id: String,
        programmes: usize,
        placeholder: bool,
    },

    /// Looking up metadata for a programme
    MetadataLookup { channel_id: String, title: String },

    /// Writing an output file
    Writing { path: PathBuf },

    /// All outputs written
    Finished,
}

impl PipelineEvent {
    pub fn channel_started(index: usize, total: usize, display_name: impl Into<String>) -> Self {
        Self::ChannelStarted {
            index,
            total,
            display_name: display_name.into(),
        }
    }

    pub fn schedule_ready(channel_id: impl Into<String>, programmes: usize, placeholder: bool) -> Self {
        Self::ScheduleReady {
            channel_id: channel_id.into(),
            programmes,
            placeholder,
        }
    }

    pub fn metadata_lookup(channel_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::MetadataLookup {
            channel_id: channel_id.into(),
            title: title.into(),
        }
    }

    pub fn writing(path: impl Into<PathBuf>) -> Self {
        Self::Writing { path: path.into() }
    }
}
