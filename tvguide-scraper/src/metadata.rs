use tvguide_core::{EpisodeMetadata, LookupKey};

use crate::bridge::decode_single;
use crate::client::{fetch_json_tree, JsonSource};
use crate::error::ScrapeError;

/// Fetch and decode the metadata record for one lookup key.
///
/// The key is the query URL. Caching is the caller's business; this always
/// goes to the network.
pub fn fetch_metadata(
    source: &dyn JsonSource,
    key: &LookupKey,
) -> Result<EpisodeMetadata, ScrapeError> {
    let tree = fetch_json_tree(source, key.as_str())?;
    decode_single(&tree)
}
