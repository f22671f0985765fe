use std::path::Path;

use tvguide_core::ChannelDescriptor;

use crate::error::FrontendError;
use crate::write_document;

/// Render the M3U playlist for the catalog. Depends on nothing but the
/// channel list.
pub fn render_playlist(channels: &[ChannelDescriptor]) -> String {
    let mut out = String::from("#EXTM3U\n");
    for channel in channels {
        out.push('\n');
        out.push_str(&format!(
            "#EXTINF:-1 channel-id=\"{id}\" tvg-id=\"{id}\" tvg-name=\"{name}\" tvg-language=\"{lang}\" tvg-country=\"{country}\" tvg-logo=\"{logo}\" group-title=\"{group}\",{title}\n",
            id = attr(&channel.id),
            name = attr(&channel.display_name),
            lang = attr(&channel.lang),
            country = attr(&channel.country),
            logo = attr(&channel.icon),
            group = attr(&channel.group),
            title = single_line(&channel.display_name),
        ));
        out.push_str(&single_line(&channel.url));
        out.push('\n');
    }
    out
}

/// Render and write the playlist to `path`.
pub fn write_playlist(channels: &[ChannelDescriptor], path: &Path) -> Result<(), FrontendError> {
    write_document(path, &render_playlist(channels))
}

/// M3U has no escaping; quotes would end the attribute.
fn attr(value: &str) -> String {
    single_line(value).replace('"', "'")
}

fn single_line(value: &str) -> String {
    value.replace(['\r', '\n'], " ").trim().to_string()
}

#[cfg(test)]
#[path = "tests/m3u_tests.rs"]
mod tests;
