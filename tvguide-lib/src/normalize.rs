//! Turns a channel's raw schedule into [`ProgramEntry`] values.

use chrono::{DateTime, FixedOffset};
use tvguide_core::time::{parse_offset, parse_schedule_time};
use tvguide_core::{ChannelDescriptor, LookupKey, ProgramEntry};
use tvguide_scraper::RawScheduleEntry;

/// Normalize one channel's raw schedule, preserving its order.
///
/// Each entry's stop time is the next emitted entry's start; the last entry
/// is open-ended. Entries whose start cannot be parsed are dropped first so
/// the chain stays unbroken. A channel whose offset cannot be parsed yields
/// nothing.
pub fn normalize_schedule(
    channel: &ChannelDescriptor,
    raw: Vec<RawScheduleEntry>,
) -> Vec<ProgramEntry> {
    let offset = match parse_offset(&channel.offset) {
        Ok(offset) => offset,
        Err(e) => {
            log::error!("Channel '{}': {e}; dropping its schedule", channel.id);
            return Vec::new();
        }
    };

    let timed: Vec<(DateTime<FixedOffset>, RawScheduleEntry)> = raw
        .into_iter()
        .filter_map(|entry| start_of(channel, &entry, offset).map(|start| (start, entry)))
        .collect();

    let starts: Vec<DateTime<FixedOffset>> = timed.iter().map(|(start, _)| *start).collect();

    timed
        .into_iter()
        .enumerate()
        .map(|(i, (start, entry))| ProgramEntry {
            channel_id: channel.id.clone(),
            start,
            stop: starts.get(i + 1).copied(),
            key: lookup_key(channel, &entry),
            title: entry.resolved_title().map(str::to_string),
            full_name: entry.full_name().map(str::to_string),
            lang: channel.lang.clone(),
            channel_url: channel.url.clone(),
        })
        .collect()
}

fn start_of(
    channel: &ChannelDescriptor,
    entry: &RawScheduleEntry,
    offset: FixedOffset,
) -> Option<DateTime<FixedOffset>> {
    let Some(raw) = entry.start_date.as_deref() else {
        log::warn!(
            "Channel '{}': dropping '{}' with no start time",
            channel.id,
            entry.resolved_title().unwrap_or("untitled")
        );
        return None;
    };
    match parse_schedule_time(raw, offset) {
        Ok(start) => Some(start),
        Err(e) => {
            log::warn!(
                "Channel '{}': dropping '{}': {e}",
                channel.id,
                entry.resolved_title().unwrap_or("untitled")
            );
            None
        }
    }
}

/// Key for the metadata lookup. Needs both a resolved title and a metadata
/// source on the channel; the query name prefers the full series name.
fn lookup_key(channel: &ChannelDescriptor, entry: &RawScheduleEntry) -> Option<LookupKey> {
    let title = entry.resolved_title()?;
    let base = channel
        .episode_query_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())?;
    let name = entry.full_name().unwrap_or(title);
    Some(LookupKey::build(
        base,
        name,
        entry.year(),
        entry.episode_number.as_deref(),
    ))
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
