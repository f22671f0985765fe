//! Metadata enrichment against the episode cache.

use std::collections::HashSet;

use tvguide_core::{LookupKey, ProgramEntry};
use tvguide_scraper::{fetch_metadata, JsonSource};

use crate::cache::EpisodeCache;

/// What happened when enriching one programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichOutcome {
    /// The programme has no lookup key
    NoKey,
    /// Already cached; no request made
    Cached,
    /// Fetched and stored in the cache
    Fetched,
    /// The fetch failed or came back empty; nothing stored
    Failed,
    /// The key already failed earlier in this run
    KnownMiss,
}

/// Fills the episode cache for programmes that have a lookup key.
///
/// Keys that fail are remembered for the rest of the run so each is requested
/// at most once per run. They are not persisted and are retried next run.
pub struct Enricher<'a> {
    source: &'a dyn JsonSource,
    misses: HashSet<LookupKey>,
}

impl<'a> Enricher<'a> {
    pub fn new(source: &'a dyn JsonSource) -> Self {
        Self {
            source,
            misses: HashSet::new(),
        }
    }

    pub fn enrich(&mut self, entry: &ProgramEntry, cache: &mut EpisodeCache) -> EnrichOutcome {
        let Some(key) = entry.key.as_ref() else {
            return EnrichOutcome::NoKey;
        };
        if cache.has(key) {
            return EnrichOutcome::Cached;
        }
        if self.misses.contains(key) {
            return EnrichOutcome::KnownMiss;
        }

        match fetch_metadata(self.source, key) {
            Ok(record) => {
                log::debug!(
                    "Fetched metadata for '{}' on '{}'",
                    entry.title.as_deref().unwrap_or_default(),
                    entry.channel_id
                );
                cache.put(key.clone(), record);
                EnrichOutcome::Fetched
            }
            Err(e) => {
                if e.is_network() {
                    log::warn!("Metadata fetch failed for {key}: {e}");
                } else {
                    log::info!("No usable metadata for {key}: {e}");
                }
                self.misses.insert(key.clone());
                EnrichOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/enrich_tests.rs"]
mod tests;
