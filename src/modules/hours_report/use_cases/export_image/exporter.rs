// Image exporter: best effort rasterization of the chart document with an external tool.
//
// Flow
// - NotAttempted -> Attempting -> Launched | ToolMissing | LaunchError. Terminal, no retry.
// - Invocations from the strategy are tried in order. A missing program moves on to the next
//   one, any other launch failure stops the attempt.
// - Launching is fire and forget. When the strategy writes the image itself, the exporter polls
//   for the expected file for at most `image_wait` and reports whether it appeared.
//
// Boundaries
// - Never returns an error and never panics. Every failure becomes an ExportOutcome.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::{debug, info, warn};

use crate::modules::hours_report::use_cases::export_image::outcome::ExportOutcome;
use crate::modules::hours_report::use_cases::export_image::strategy::{
    ExportStrategy, strategy_for_current_platform,
};
use crate::modules::hours_report::use_cases::render_chart::chart::CHART_IMAGE_FILE;
use crate::shared::infrastructure::process_launcher::{LaunchError, ProcessLauncher};

pub const DEFAULT_IMAGE_WAIT: Duration = Duration::from_secs(5);
const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct ImageExporter<TLauncher>
where
    TLauncher: ProcessLauncher + ?Sized,
{
    strategy: Box<dyn ExportStrategy>,
    launcher: Arc<TLauncher>,
    image_wait: Duration,
    poll_interval: Duration,
}

impl<TLauncher> ImageExporter<TLauncher>
where
    TLauncher: ProcessLauncher + ?Sized,
{
    pub fn new(strategy: Box<dyn ExportStrategy>, launcher: Arc<TLauncher>) -> Self {
        Self {
            strategy,
            launcher,
            image_wait: DEFAULT_IMAGE_WAIT,
            poll_interval: POLL_INTERVAL,
        }
    }

    pub fn for_current_platform(launcher: Arc<TLauncher>) -> Self {
        Self::new(strategy_for_current_platform(), launcher)
    }

    pub fn with_image_wait(mut self, image_wait: Duration) -> Self {
        self.image_wait = image_wait;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn image_path_for(chart: &Path) -> PathBuf {
        chart.with_file_name(CHART_IMAGE_FILE)
    }

    pub async fn export(&self, chart: &Path) -> ExportOutcome {
        let tool = self.strategy.tool().to_string();
        let image = Self::image_path_for(chart);

        if self.strategy.produces_image() {
            // A leftover image from an earlier run would pass the existence check.
            match tokio::fs::remove_file(&image).await {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                    debug!(path = %image.display(), error = %e, "could not remove stale image");
                }
                _ => {}
            }
        }

        for invocation in self.strategy.invocations(chart, &image) {
            debug!(%invocation, "attempting image export");
            match self.launcher.launch(&invocation) {
                Ok(()) => {
                    info!(tool = %tool, program = %invocation.program, "image renderer launched");
                    let image = if self.strategy.produces_image() {
                        self.wait_for_image(&image).await
                    } else {
                        None
                    };
                    return ExportOutcome::Launched { tool, image };
                }
                Err(LaunchError::NotFound { program }) => {
                    debug!(%program, "renderer not found, trying next candidate");
                }
                Err(LaunchError::Failed { program, reason }) => {
                    warn!(%program, %reason, "image renderer failed to launch");
                    return ExportOutcome::LaunchError { tool, reason };
                }
            }
        }

        warn!(tool = %tool, "no image renderer available");
        ExportOutcome::ToolMissing { tool }
    }

    async fn wait_for_image(&self, image: &Path) -> Option<PathBuf> {
        let deadline = Instant::now() + self.image_wait;
        loop {
            if tokio::fs::try_exists(image).await.unwrap_or(false) {
                return Some(image.to_path_buf());
            }
            if Instant::now() >= deadline {
                debug!(path = %image.display(), wait = ?self.image_wait, "image did not appear");
                return None;
            }
            sleep(self.poll_interval).await;
        }
    }
}
