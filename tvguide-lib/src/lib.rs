//! The guide-building pipeline.
//!
//! Ties the catalog, the scraper and the output writers together: settings,
//! the persisted episode cache, schedule normalization, metadata enrichment,
//! guide assembly, and the run loop that drives them over a
//! [`PipelineContext`].

pub mod assemble;
pub mod cache;
pub mod context;
pub mod enrich;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod progress;
pub mod settings;

pub use assemble::{assemble_programme, AssemblyOutcome};
pub use cache::{EpisodeCache, CACHE_VERSION};
pub use context::{ChannelSchedule, PipelineContext};
pub use enrich::{EnrichOutcome, Enricher};
pub use error::{CacheError, FieldAccessError, PipelineError};
pub use normalize::normalize_schedule;
pub use pipeline::{build_guide, run, write_outputs, RunReport};
pub use progress::PipelineEvent;
pub use settings::{settings_path, InfoLink, Settings};

// Re-exports so frontends only need this crate.
pub use tvguide_core::{ChannelDescriptor, GuideDocument};
pub use tvguide_scraper::{ClientOptions, HttpClient, JsonSource};
