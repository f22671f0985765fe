//! Core data model for the guide builder.
//!
//! Channel descriptors, normalized schedule entries, cached episode metadata
//! and the guide document, plus the small pure helpers every stage shares:
//! timestamp handling, lookup-key construction and the string denylist.

pub mod channel;
pub mod denylist;
pub mod error;
pub mod guide;
pub mod key;
pub mod metadata;
pub mod program;
pub mod time;

pub use channel::ChannelDescriptor;
pub use error::CoreError;
pub use guide::{
    Credits, EpisodeNum, GeneratorInfo, GuideChannel, GuideDocument, GuideProgramme, LangText,
    Rating, StarRating,
};
pub use key::LookupKey;
pub use metadata::{EpisodeInfo, EpisodeMetadata};
pub use program::ProgramEntry;
