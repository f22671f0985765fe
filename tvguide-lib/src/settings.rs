//! Run settings.
//!
//! Settings come from `~/.config/tvguide/settings.toml` (or a file named on
//! the command line) and are then overridden field by field by the CLI. A
//! missing file means all defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use tvguide_core::GeneratorInfo;
use tvguide_scraper::ClientOptions;

use crate::error::PipelineError;

pub const GUIDE_FILE: &str = "guide.xml";
pub const PLAYLIST_FILE: &str = "channels.m3u";
pub const CACHE_FILE: &str = "episode-cache.json";
pub const LOG_FILE: &str = "tvguide.log";

/// Canonical path to the settings file: `~/.config/tvguide/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("tvguide").join("settings.toml")
}

/// A name and URL pair for the guide's generator and source attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Channel catalog (YAML)
    pub catalog: PathBuf,
    /// Directory for the guide, the playlist and the episode cache
    pub out_dir: PathBuf,
    /// Log directory; `<out_dir>/log` when unset
    pub log_dir: Option<PathBuf>,
    /// Schedule items requested per channel
    pub guide_items: usize,
    /// Load and save the episode cache between runs
    pub episode_cache: bool,
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Accept invalid TLS certificates from sources
    pub insecure_tls: bool,
    pub generator: InfoLink,
    pub source: InfoLink,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("channels.yaml"),
            out_dir: PathBuf::from("output"),
            log_dir: None,
            guide_items: 200,
            episode_cache: false,
            log_level: "error".to_string(),
            request_timeout_secs: 30,
            insecure_tls: false,
            generator: InfoLink {
                name: "tvguide".to_string(),
                url: "https://example.com/tvguide".to_string(),
            },
            source: InfoLink {
                name: "tvguide".to_string(),
                url: "https://example.com/tvguide".to_string(),
            },
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        if !path.is_file() {
            log::debug!("No settings at {}; using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| PipelineError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents).map_err(|source| PipelineError::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Configured log level. Accepts the `log` names plus `warning` and
    /// `critical`; anything else falls back to `error`.
    pub fn level_filter(&self) -> LevelFilter {
        let name = self.log_level.trim();
        if name.eq_ignore_ascii_case("warning") {
            return LevelFilter::Warn;
        }
        if name.eq_ignore_ascii_case("critical") {
            return LevelFilter::Error;
        }
        name.parse().unwrap_or(LevelFilter::Error)
    }

    pub fn guide_path(&self) -> PathBuf {
        self.out_dir.join(GUIDE_FILE)
    }

    pub fn playlist_path(&self) -> PathBuf {
        self.out_dir.join(PLAYLIST_FILE)
    }

    pub fn cache_path(&self) -> PathBuf {
        self.out_dir.join(CACHE_FILE)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| self.out_dir.join("log"))
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_dir().join(LOG_FILE)
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: Duration::from_secs(self.request_timeout_secs),
            insecure_tls: self.insecure_tls,
            ..ClientOptions::default()
        }
    }

    /// Root attributes for a guide generated on `date`.
    pub fn generator_info(&self, date: chrono::NaiveDate) -> GeneratorInfo {
        GeneratorInfo {
            date,
            source_info_name: self.source.name.clone(),
            source_info_url: self.source.url.clone(),
            generator_info_name: self.generator.name.clone(),
            generator_info_url: self.generator.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings = Settings::parse(
            r#"
            guide_items = 50
            episode_cache = true

            [generator]
            name = "my-guide"
            url = "https://example.com/my-guide"
            "#,
        )
        .unwrap();
        assert_eq!(settings.guide_items, 50);
        assert!(settings.episode_cache);
        assert_eq!(settings.generator.name, "my-guide");
        assert_eq!(settings.source, Settings::default().source);
        assert_eq!(settings.request_timeout_secs, 30);
        assert_eq!(settings.catalog, PathBuf::from("channels.yaml"));
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_error() {
        let mut settings = Settings::default();
        assert_eq!(settings.level_filter(), LevelFilter::Error);
        settings.log_level = "INFO".to_string();
        assert_eq!(settings.level_filter(), LevelFilter::Info);
        settings.log_level = "chatty".to_string();
        assert_eq!(settings.level_filter(), LevelFilter::Error);
    }

    #[test]
    fn test_warning_and_critical_level_names() {
        let level = |name: &str| {
            Settings {
                log_level: name.to_string(),
                ..Settings::default()
            }
            .level_filter()
        };
        assert_eq!(level("WARNING"), LevelFilter::Warn);
        assert_eq!(level("warning"), LevelFilter::Warn);
        assert_eq!(level("WARN"), LevelFilter::Warn);
        assert_eq!(level("CRITICAL"), LevelFilter::Error);
        assert_eq!(level("Critical"), LevelFilter::Error);
        assert_eq!(level("ERROR"), LevelFilter::Error);
        assert_eq!(level("DEBUG"), LevelFilter::Debug);
    }

    #[test]
    fn test_client_options_validate_certificates_by_default() {
        let options = Settings::default().client_options();
        assert!(!options.insecure_tls);
        assert_eq!(options.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_client_options_follow_settings_file() {
        let settings = Settings::parse(
            r#"
            insecure_tls = true
            request_timeout_secs = 5
            "#,
        )
        .unwrap();
        let options = settings.client_options();
        assert!(options.insecure_tls);
        assert_eq!(options.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_output_paths() {
        let settings = Settings {
            out_dir: PathBuf::from("/srv/guide"),
            ..Settings::default()
        };
        assert_eq!(settings.guide_path(), PathBuf::from("/srv/guide/guide.xml"));
        assert_eq!(settings.playlist_path(), PathBuf::from("/srv/guide/channels.m3u"));
        assert_eq!(settings.cache_path(), PathBuf::from("/srv/guide/episode-cache.json"));
        assert_eq!(settings.log_path(), PathBuf::from("/srv/guide/log/tvguide.log"));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_bad_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "guide_items = \"lots\"").unwrap();
        assert!(matches!(
            Settings::load(&path),
            Err(PipelineError::Settings { .. })
        ));
    }
}
