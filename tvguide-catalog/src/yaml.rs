//! YAML loading for the channel catalog.
//!
//! Either a bare sequence of channels or a mapping with a `channels` key:
//!
//! ```text
//! channels:
//!   - id: toonami-east
//!     display_name: "Toonami Aftermath East"
//!     url: https://stream.example.com/east.m3u8
//!     schedule_url: https://api.example.com/schedule?tz=est&count={count}
//!     episode_query_url: https://api.example.com/episode
//!     offset: "-0500"
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tvguide_core::ChannelDescriptor;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Channel catalog not found: {0}")]
    Missing(String),
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<ChannelDescriptor>),
    Document { channels: Vec<ChannelDescriptor> },
}

/// Load the channel catalog from a YAML file.
///
/// A missing file is [`CatalogError::Missing`]; the caller treats it as fatal.
pub fn load_channels(path: &Path) -> Result<Vec<ChannelDescriptor>, CatalogError> {
    if !path.is_file() {
        return Err(CatalogError::Missing(path.display().to_string()));
    }
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let channels = parse_channels(&contents).map_err(|e| match e {
        CatalogError::Parse { source, .. } => CatalogError::Parse {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })?;
    log::debug!("Loaded {} channels from {}", channels.len(), path.display());
    Ok(channels)
}

/// Parse catalog YAML, preserving channel order.
pub fn parse_channels(contents: &str) -> Result<Vec<ChannelDescriptor>, CatalogError> {
    let file: CatalogFile = serde_yml::from_str(contents).map_err(|e| CatalogError::Parse {
        path: "<inline>".to_string(),
        source: e,
    })?;
    let channels = match file {
        CatalogFile::List(channels) => channels,
        CatalogFile::Document { channels } => channels,
    };
    validate(&channels)?;
    Ok(channels)
}

fn validate(channels: &[ChannelDescriptor]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for (index, channel) in channels.iter().enumerate() {
        if channel.id.trim().is_empty() {
            return Err(CatalogError::Invalid(format!(
                "channel #{} has an empty id",
                index + 1
            )));
        }
        if !seen.insert(channel.id.as_str()) {
            return Err(CatalogError::Invalid(format!(
                "duplicate channel id '{}'",
                channel.id
            )));
        }
    }
    Ok(())
}
