//! Per-channel schedule retrieval.

use chrono::{DateTime, FixedOffset, TimeDelta};
use tvguide_core::time::top_of_hour;
use tvguide_core::{ChannelDescriptor, GuideProgramme, LangText};

use crate::bridge::decode_list;
use crate::client::{fetch_json_tree, JsonSource};
use crate::error::ScrapeError;
use crate::types::RawScheduleEntry;

/// Number of one-hour blocks in a placeholder schedule. The end boundary is
/// exclusive, so a day is exactly this many blocks.
pub const PLACEHOLDER_HOURS: usize = 24;

const COUNT_TOKEN: &str = "{count}";

/// Build the schedule request URL for `count` items.
///
/// A `{count}` token in the template is replaced; otherwise `count=<n>` is
/// appended as a query parameter.
pub fn schedule_url(template: &str, count: usize) -> String {
    let template = template.trim();
    if template.contains(COUNT_TOKEN) {
        return template.replace(COUNT_TOKEN, &count.to_string());
    }
    let separator = if template.contains('?') { '&' } else { '?' };
    format!("{template}{separator}count={count}")
}

/// Fetch the raw schedule for a channel that has a schedule URL.
///
/// Errors are returned to the caller, which logs them and carries on with an
/// empty schedule.
pub fn fetch_schedule(
    source: &dyn JsonSource,
    channel: &ChannelDescriptor,
    count: usize,
) -> Result<Vec<RawScheduleEntry>, ScrapeError> {
    let template = channel
        .schedule_url
        .as_deref()
        .ok_or_else(|| ScrapeError::shape(format!("channel '{}' has no schedule URL", channel.id)))?;
    let url = schedule_url(template, count);

    let tree = fetch_json_tree(source, &url)?;
    let entries: Vec<RawScheduleEntry> = decode_list(&tree)?;
    log::debug!(
        "Schedule for '{}' has {} entries ({url})",
        channel.id,
        entries.len()
    );
    Ok(entries)
}

/// Synthesize a day of hourly blocks for a channel without a schedule.
///
/// Blocks start at the top of the hour containing `now` and are titled with
/// the channel's display name. They go straight into the guide.
pub fn placeholder_schedule(
    channel: &ChannelDescriptor,
    now: DateTime<FixedOffset>,
) -> Vec<GuideProgramme> {
    let Some(first) = top_of_hour(&now) else {
        return Vec::new();
    };
    log::debug!(
        "Channel '{}' has no schedule; making {PLACEHOLDER_HOURS} hourly blocks from {first}",
        channel.display_name
    );

    let icon = Some(channel.icon.trim())
        .filter(|icon| !icon.is_empty())
        .map(str::to_string);

    (0..PLACEHOLDER_HOURS as i64)
        .map(|hour| {
            let start = first + TimeDelta::hours(hour);
            let stop = start + TimeDelta::hours(1);
            let mut programme = GuideProgramme::new(
                channel.id.clone(),
                start,
                Some(stop),
                LangText::new(channel.display_name.clone(), &channel.lang),
            );
            programme.icon = icon.clone();
            programme
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/schedule_tests.rs"]
mod tests;
