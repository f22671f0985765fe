//! Persisted episode metadata cache.
//!
//! Keyed by [`LookupKey`]. Entries are only ever added during a run; a stored
//! record is never replaced. The pipeline owns the one instance and runs
//! strictly sequentially, so the `has` then `put` pattern needs no locking.

use std::collections::BTreeMap;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tvguide_core::{EpisodeMetadata, LookupKey};

use crate::error::CacheError;

/// Cache format version. Files written with another version are discarded.
pub const CACHE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct CacheFile {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    episodes: BTreeMap<LookupKey, EpisodeMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodeCache {
    entries: BTreeMap<LookupKey, EpisodeMetadata>,
}

impl EpisodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, key: &LookupKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &LookupKey) -> Option<&EpisodeMetadata> {
        self.entries.get(key)
    }

    /// Store a record. Returns `false` and keeps the existing record if the
    /// key is already present.
    pub fn put(&mut self, key: LookupKey, record: EpisodeMetadata) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, record);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read a cache document. A version mismatch yields an empty cache.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CacheError> {
        let file: CacheFile = serde_json::from_reader(reader)?;
        if file.version != CACHE_VERSION {
            log::info!(
                "Discarding episode cache version {} (expected {CACHE_VERSION})",
                file.version
            );
            return Ok(Self::new());
        }
        Ok(Self {
            entries: file.episodes,
        })
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), CacheError> {
        let file = CacheFileRef {
            version: CACHE_VERSION,
            episodes: &self.entries,
        };
        serde_json::to_writer_pretty(writer, &file)?;
        Ok(())
    }

    /// Load the cache from `path`. A missing file is an empty cache.
    pub fn load_from(path: &Path) -> Result<Self, CacheError> {
        if !path.exists() {
            log::debug!("No episode cache at {}", path.display());
            return Ok(Self::new());
        }
        let file = fs::File::open(path)?;
        let cache = Self::from_reader(std::io::BufReader::new(file))?;
        log::debug!("Loaded {} cached episodes from {}", cache.len(), path.display());
        Ok(cache)
    }

    /// Write the whole cache to `path`, replacing the file.
    pub fn save_to(&self, path: &Path) -> Result<(), CacheError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut buf = Vec::new();
        self.to_writer(&mut buf)?;
        fs::write(path, buf)?;
        log::debug!("Saved {} episodes to {}", self.len(), path.display());
        Ok(())
    }
}

#[derive(Serialize)]
struct CacheFileRef<'a> {
    version: u32,
    episodes: &'a BTreeMap<LookupKey, EpisodeMetadata>,
}

#[cfg(test)]
#[path = "tests/cache_tests.rs"]
mod tests;
