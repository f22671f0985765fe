use chrono::{DateTime, FixedOffset};

use crate::key::LookupKey;

/// A normalized schedule entry bound to its channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramEntry {
    pub channel_id: String,
    pub start: DateTime<FixedOffset>,
    /// Start of the following entry. The last entry of a schedule is open-ended.
    pub stop: Option<DateTime<FixedOffset>>,
    /// `name`, falling back to `blockName`
    pub title: Option<String>,
    /// Full series name from the schedule's `info` block, if given
    pub full_name: Option<String>,
    pub lang: String,
    /// Absent when there is no title or the channel has no metadata source
    pub key: Option<LookupKey>,
    pub channel_url: String,
}

impl ProgramEntry {
    /// Title for the guide: full name first, then the resolved title.
    pub fn guide_title(&self) -> Option<&str> {
        self.full_name.as_deref().or(self.title.as_deref())
    }
}
