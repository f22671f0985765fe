//! Output documents: the XMLTV guide and the M3U playlist.

pub mod error;
pub mod m3u;
pub mod ratings;
pub mod xmltv;

pub use error::FrontendError;
pub use m3u::{render_playlist, write_playlist};
pub use ratings::rating_for;
pub use xmltv::{render_guide, write_guide};

use std::fs;
use std::io::Write;
use std::path::Path;

/// Write a rendered document, creating the parent directory if needed.
///
/// The file is written in place, not atomically.
pub(crate) fn write_document(path: &Path, contents: &str) -> Result<(), FrontendError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
