//! The run loop.
//!
//! catalog -> schedules -> metadata -> assembly -> output files, one channel
//! and one request at a time.

use chrono::{DateTime, FixedOffset};
use tvguide_core::GuideChannel;
use tvguide_frontend::{write_guide, write_playlist};
use tvguide_scraper::{fetch_schedule, placeholder_schedule, JsonSource};

use crate::assemble::{assemble_programme, AssemblyOutcome};
use crate::cache::EpisodeCache;
use crate::context::{ChannelSchedule, PipelineContext};
use crate::enrich::{EnrichOutcome, Enricher};
use crate::error::PipelineError;
use crate::normalize::normalize_schedule;
use crate::progress::PipelineEvent;
use crate::settings::Settings;

/// Tally of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub channels: usize,
    pub scheduled_channels: usize,
    pub placeholder_channels: usize,
    /// Channels whose schedule source failed or was empty
    pub unavailable_channels: usize,
    pub programmes_emitted: usize,
    pub programmes_skipped: usize,
    pub metadata_fetched: usize,
    pub metadata_cached: usize,
    pub metadata_failed: usize,
    /// Entries in the episode cache at the end of the run
    pub cache_entries: usize,
}

/// Run the whole pipeline and write the outputs.
///
/// `now` anchors placeholder schedules and the guide date. Only a missing
/// catalog or a failed output write is an error; source failures are logged
/// and the run carries on.
pub fn run(
    settings: &Settings,
    source: &dyn JsonSource,
    now: DateTime<FixedOffset>,
    on_event: &mut dyn FnMut(PipelineEvent),
) -> Result<RunReport, PipelineError> {
    let channels = tvguide_catalog::load_channels(&settings.catalog)?;
    on_event(PipelineEvent::CatalogLoaded {
        channels: channels.len(),
    });

    let cache = load_cache(settings);
    let mut ctx = PipelineContext::new(settings.clone(), channels, cache, now.date_naive());

    build_guide(&mut ctx, source, now, on_event);
    write_outputs(&ctx, on_event)?;
    on_event(PipelineEvent::Finished);

    Ok(ctx.report)
}

/// Fetch, enrich and assemble into `ctx.document`. Writes nothing.
pub fn build_guide(
    ctx: &mut PipelineContext,
    source: &dyn JsonSource,
    now: DateTime<FixedOffset>,
    on_event: &mut dyn FnMut(PipelineEvent),
) {
    fetch_schedules(ctx, source, now, on_event);
    enrich_programmes(ctx, source, on_event);
    assemble_guide(ctx);
    ctx.report.cache_entries = ctx.cache.len();
}

/// Write the guide, the playlist and (if enabled) the episode cache.
pub fn write_outputs(
    ctx: &PipelineContext,
    on_event: &mut dyn FnMut(PipelineEvent),
) -> Result<(), PipelineError> {
    let settings = &ctx.settings;

    let guide_path = settings.guide_path();
    on_event(PipelineEvent::writing(&guide_path));
    write_guide(&ctx.document, &guide_path).map_err(|source| PipelineError::Output {
        path: guide_path.clone(),
        source,
    })?;
    log::info!(
        "Wrote {} programmes for {} channels to {}",
        ctx.document.programmes.len(),
        ctx.document.channels.len(),
        guide_path.display()
    );

    let playlist_path = settings.playlist_path();
    on_event(PipelineEvent::writing(&playlist_path));
    write_playlist(&ctx.channels, &playlist_path).map_err(|source| PipelineError::Output {
        path: playlist_path.clone(),
        source,
    })?;
    log::info!("Wrote playlist to {}", playlist_path.display());

    if settings.episode_cache {
        let cache_path = settings.cache_path();
        on_event(PipelineEvent::writing(&cache_path));
        ctx.cache.save_to(&cache_path)?;
    }
    Ok(())
}

fn load_cache(settings: &Settings) -> EpisodeCache {
    if !settings.episode_cache {
        return EpisodeCache::new();
    }
    let path = settings.cache_path();
    match EpisodeCache::load_from(&path) {
        Ok(cache) => cache,
        Err(e) => {
            log::warn!(
                "Ignoring unreadable episode cache {}: {e}",
                path.display()
            );
            EpisodeCache::new()
        }
    }
}

fn fetch_schedules(
    ctx: &mut PipelineContext,
    source: &dyn JsonSource,
    now: DateTime<FixedOffset>,
    on_event: &mut dyn FnMut(PipelineEvent),
) {
    let total = ctx.channels.len();
    let count = ctx.settings.guide_items;
    let mut schedules = Vec::with_capacity(total);

    for (i, channel) in ctx.channels.iter().enumerate() {
        on_event(PipelineEvent::channel_started(i + 1, total, &channel.display_name));

        let schedule = if channel.has_schedule() {
            match fetch_schedule(source, channel, count) {
                Ok(raw) if !raw.is_empty() => {
                    ctx.report.scheduled_channels += 1;
                    ChannelSchedule::Scheduled(normalize_schedule(channel, raw))
                }
                Ok(_) => {
                    log::warn!("Schedule for '{}' is empty", channel.id);
                    ctx.report.unavailable_channels += 1;
                    ChannelSchedule::Unavailable
                }
                Err(e) => {
                    log::error!("Schedule for '{}' unavailable: {e}", channel.id);
                    ctx.report.unavailable_channels += 1;
                    ChannelSchedule::Unavailable
                }
            }
        } else {
            ctx.report.placeholder_channels += 1;
            ChannelSchedule::Placeholder(placeholder_schedule(channel, now))
        };

        on_event(PipelineEvent::schedule_ready(
            &channel.id,
            schedule.len(),
            matches!(schedule, ChannelSchedule::Placeholder(_)),
        ));
        schedules.push(schedule);
    }

    ctx.schedules = schedules;
}

fn enrich_programmes(
    ctx: &mut PipelineContext,
    source: &dyn JsonSource,
    on_event: &mut dyn FnMut(PipelineEvent),
) {
    let mut enricher = Enricher::new(source);

    for schedule in &ctx.schedules {
        let ChannelSchedule::Scheduled(entries) = schedule else {
            continue;
        };
        for entry in entries.iter().filter(|e| e.key.is_some()) {
            on_event(PipelineEvent::metadata_lookup(
                &entry.channel_id,
                entry.guide_title().unwrap_or_default(),
            ));
            match enricher.enrich(entry, &mut ctx.cache) {
                EnrichOutcome::Fetched => ctx.report.metadata_fetched += 1,
                EnrichOutcome::Cached => ctx.report.metadata_cached += 1,
                EnrichOutcome::Failed => ctx.report.metadata_failed += 1,
                EnrichOutcome::NoKey | EnrichOutcome::KnownMiss => {}
            }
        }
    }
}

fn assemble_guide(ctx: &mut PipelineContext) {
    let PipelineContext {
        channels,
        schedules,
        cache,
        document,
        report,
        ..
    } = ctx;

    for (channel, schedule) in channels.iter().zip(schedules.iter()) {
        document.channels.push(GuideChannel::from(channel));

        match schedule {
            ChannelSchedule::Scheduled(entries) => {
                for entry in entries {
                    let metadata = entry.key.as_ref().and_then(|key| cache.get(key));
                    match assemble_programme(channel, entry, metadata) {
                        AssemblyOutcome::Built(programme) => {
                            document.programmes.push(programme);
                            report.programmes_emitted += 1;
                        }
                        AssemblyOutcome::Skipped { .. } => report.programmes_skipped += 1,
                    }
                }
            }
            ChannelSchedule::Placeholder(programmes) => {
                report.programmes_emitted += programmes.len();
                document.programmes.extend(programmes.iter().cloned());
            }
            ChannelSchedule::Unavailable => {}
        }
    }
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
