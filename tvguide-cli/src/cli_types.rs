//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tvguide")]
#[command(about = "Build an XMLTV guide and M3U playlist from a channel catalog", long_about = None)]
pub(crate) struct Cli {
    /// Settings file (defaults to ~/.config/tvguide/settings.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Channel catalog (YAML)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Directory for guide.xml, channels.m3u and the episode cache
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Log directory (defaults to <out-dir>/log)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Schedule items to request per channel
    #[arg(short = 'n', long)]
    pub guide_items: Option<usize>,

    /// Load and save the episode metadata cache
    #[arg(long)]
    pub ep_cache: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Accept invalid TLS certificates from schedule and metadata sources
    #[arg(long)]
    pub insecure_tls: bool,

    /// Only show warnings and errors (no spinner)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
