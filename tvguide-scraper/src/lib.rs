//! Schedule and metadata retrieval.
//!
//! Everything that talks to the outside world lives here: the blocking HTTP
//! client, the tolerant JSON bridge that turns loosely-shaped responses into
//! typed records, the schedule fetcher with its placeholder fallback, and the
//! metadata fetch for a single lookup key.

pub mod bridge;
pub mod client;
pub mod error;
pub mod metadata;
pub mod schedule;
pub mod types;

pub use bridge::{FromTagged, NodeContent, TaggedNode, ELEMENT_TAG};
pub use client::{fetch_json_tree, ClientOptions, HttpClient, JsonSource};
pub use error::ScrapeError;
pub use metadata::fetch_metadata;
pub use schedule::{fetch_schedule, placeholder_schedule, schedule_url, PLACEHOLDER_HOURS};
pub use types::{RawInfo, RawScheduleEntry};
