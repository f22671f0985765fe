use std::path::PathBuf;

use thiserror::Error;
use tvguide_catalog::CatalogError;
use tvguide_core::CoreError;
use tvguide_frontend::FrontendError;
use tvguide_scraper::ScrapeError;

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The channel catalog is missing or unreadable
    #[error("Channel catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to read settings {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid settings file {path}: {source}")]
    Settings {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// The HTTP client could not be built
    #[error("HTTP client setup failed: {0}")]
    Client(#[from] ScrapeError),

    #[error("Failed to write {path}: {source}")]
    Output {
        path: PathBuf,
        source: FrontendError,
    },

    #[error("Failed to save episode cache: {0}")]
    Cache(#[from] CacheError),
}

/// Errors reading or writing the persisted episode cache.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A nested metadata field could not be read while assembling a programme.
#[derive(Debug, Error)]
pub enum FieldAccessError {
    #[error("episode record has no {0}")]
    MissingEpisodeField(&'static str),

    #[error("release date: {0}")]
    ReleaseDate(#[from] CoreError),
}
