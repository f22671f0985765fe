//! Channel catalog loading.
//!
//! The catalog is a human-curated YAML file listing every channel the guide
//! covers, in the order they should appear in the guide and playlist.

pub mod yaml;

pub use yaml::{load_channels, parse_channels, CatalogError};
