//! Progress spinner driven by pipeline events.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tvguide_lib::PipelineEvent;

pub(crate) struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// When `quiet` is true the spinner is never drawn.
    pub(crate) fn new(quiet: bool) -> Self {
        let pb = ProgressBar::new_spinner();
        if quiet {
            pb.set_draw_target(ProgressDrawTarget::hidden());
        } else {
            pb.enable_steady_tick(Duration::from_millis(100));
        }
        if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {msg}") {
            pb.set_style(style.tick_chars("/-\\|"));
        }
        Self { pb }
    }

    pub(crate) fn handle(&self, event: &PipelineEvent) {
        match event {
            PipelineEvent::CatalogLoaded { channels } => {
                self.pb.set_message(format!("Loaded {channels} channels"));
            }
            PipelineEvent::ChannelStarted {
                index,
                total,
                display_name,
            } => {
                self.pb
                    .set_message(format!("[{index}/{total}] Fetching schedule for {display_name}"));
            }
            PipelineEvent::ScheduleReady { .. } => {}
            PipelineEvent::MetadataLookup { channel_id, title } => {
                self.pb.set_message(format!("Metadata: {title} ({channel_id})"));
            }
            PipelineEvent::Writing { path } => {
                self.pb.set_message(format!("Writing {}", path.display()));
            }
            PipelineEvent::Finished => self.pb.set_message("Done"),
        }
    }

    pub(crate) fn finish(&self) {
        self.pb.disable_steady_tick();
        self.pb.finish_and_clear();
    }
}
