//! tvguide CLI
//!
//! Builds an XMLTV guide and an M3U playlist from a channel catalog.

mod cli_types;
mod error;
mod logging;
mod spinner;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use tvguide_lib::{settings_path, HttpClient, PipelineError, RunReport, Settings};

use crate::cli_types::Cli;
use crate::error::CliError;
use crate::spinner::Spinner;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{e}");
        eprintln!("{} {e}", "\u{2718}".if_supports_color(Stderr, |t| t.red()));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = load_settings(&cli)?;

    let level = logging::effective_level(settings.level_filter(), cli.verbose, cli.quiet);
    logging::init(level, &settings.log_path())?;
    log::debug!("Settings: {settings:?}");

    let client = HttpClient::new(&settings.client_options()).map_err(PipelineError::from)?;
    let spinner = Spinner::new(cli.quiet);
    let now = chrono::Local::now().fixed_offset();

    let result = tvguide_lib::run(&settings, &client, now, &mut |event| spinner.handle(&event));
    spinner.finish();
    let report = result?;

    if !cli.quiet {
        print_summary(&settings, &report);
    }
    Ok(())
}

/// Settings file first, then command-line overrides.
fn load_settings(cli: &Cli) -> Result<Settings, CliError> {
    let path = cli.config.clone().unwrap_or_else(settings_path);
    let mut settings = Settings::load(&path)?;

    if let Some(ref catalog) = cli.catalog {
        settings.catalog = catalog.clone();
    }
    if let Some(ref out_dir) = cli.out_dir {
        settings.out_dir = out_dir.clone();
    }
    if let Some(ref log_dir) = cli.log_dir {
        settings.log_dir = Some(log_dir.clone());
    }
    if let Some(items) = cli.guide_items {
        settings.guide_items = items;
    }
    if let Some(ref level) = cli.log_level {
        settings.log_level = level.clone();
    }
    if let Some(timeout) = cli.timeout {
        settings.request_timeout_secs = timeout;
    }
    settings.episode_cache |= cli.ep_cache;
    settings.insecure_tls |= cli.insecure_tls;

    Ok(settings)
}

fn print_summary(settings: &Settings, report: &RunReport) {
    println!(
        "{} {} channels ({} scheduled, {} placeholder, {} unavailable)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        report.channels,
        report.scheduled_channels,
        report.placeholder_channels,
        report.unavailable_channels,
    );
    println!(
        "{} {} programmes written to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        report.programmes_emitted,
        settings
            .guide_path()
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    println!(
        "  metadata: {} fetched, {} cached, {} failed ({} in cache)",
        report.metadata_fetched,
        report.metadata_cached,
        report.metadata_failed,
        report.cache_entries,
    );
    if report.programmes_skipped > 0 {
        println!(
            "{} {} programmes skipped (see {})",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            report.programmes_skipped,
            settings.log_path().display(),
        );
    }
    println!(
        "  playlist: {}",
        settings
            .playlist_path()
            .display()
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
}
