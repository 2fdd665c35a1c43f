use crate::modules::hours_report::core::aggregate::aggregate_hours;
use crate::modules::hours_report::core::ranking::{Ranking, rank_employees};
use crate::modules::hours_report::core::validate::validate_entries;
use crate::modules::hours_report::use_cases::export_image::exporter::ImageExporter;
use crate::modules::hours_report::use_cases::export_image::outcome::ExportOutcome;
use crate::modules::hours_report::use_cases::generate_report::source_port::{
    SourceError, TimeEntrySource,
};
use crate::modules::hours_report::use_cases::generate_report::summary::{
    ArtifactStatus, ReportSummary,
};
use crate::modules::hours_report::use_cases::render_chart::chart::{
    CHART_REPORT_FILE, ChartError, render_chart,
};
use crate::modules::hours_report::use_cases::render_table::table::{
    TABLE_REPORT_FILE, render_table,
};
use crate::shared::infrastructure::artifact_store::ArtifactStore;
use crate::shared::infrastructure::process_launcher::ProcessLauncher;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Source(#[from] SourceError),
}

pub struct GenerateReportHandler<TSource, TStore, TLauncher>
where
    TSource: TimeEntrySource + ?Sized,
    TStore: ArtifactStore + ?Sized,
    TLauncher: ProcessLauncher + ?Sized,
{
    source: Arc<TSource>,
    store: Arc<TStore>,
    exporter: ImageExporter<TLauncher>,
}

impl<TSource, TStore, TLauncher> GenerateReportHandler<TSource, TStore, TLauncher>
where
    TSource: TimeEntrySource + ?Sized,
    TStore: ArtifactStore + ?Sized,
    TLauncher: ProcessLauncher + ?Sized,
{
    pub fn new(
        source: Arc<TSource>,
        store: Arc<TStore>,
        exporter: ImageExporter<TLauncher>,
    ) -> Self {
        Self {
            source,
            store,
            exporter,
        }
    }

    pub async fn handle(&self) -> Result<ReportSummary, ApplicationError> {
        // Nothing is written unless the entries were obtained.
        let entries = self.source.fetch().await?;

        let mut kept = 0usize;
        let hours = aggregate_hours(validate_entries(&entries).inspect(|_| kept += 1));
        if kept < entries.len() {
            debug!(dropped = entries.len() - kept, kept, "invalid time entries skipped");
        }

        let ranking = rank_employees(&hours);
        info!(
            employees = ranking.len(),
            total_hours = ranking.total_hours(),
            "hours aggregated"
        );

        let table = self.write_table(&ranking).await;
        let chart = self.write_chart(&ranking).await;
        let image = match chart.path() {
            Some(path) => self.exporter.export(path).await,
            None => ExportOutcome::NotAttempted,
        };
        if !image.is_success() && chart.is_written() {
            warn!(%image, "chart image export degraded to manual screenshot");
        }

        Ok(ReportSummary {
            employees: ranking.len(),
            total_hours: ranking.total_hours(),
            table,
            chart,
            image,
        })
    }

    async fn write_table(&self, ranking: &Ranking) -> ArtifactStatus {
        self.write(TABLE_REPORT_FILE, &render_table(ranking)).await
    }

    async fn write_chart(&self, ranking: &Ranking) -> ArtifactStatus {
        match render_chart(ranking) {
            Ok(html) => self.write(CHART_REPORT_FILE, &html).await,
            Err(e @ ChartError::NothingToReport) => {
                info!("chart skipped, total recorded hours is zero");
                ArtifactStatus::Skipped {
                    reason: e.to_string(),
                }
            }
            Err(e) => {
                error!(error = %e, "chart could not be rendered");
                ArtifactStatus::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn write(&self, name: &str, contents: &str) -> ArtifactStatus {
        match self.store.write(name, contents).await {
            Ok(path) => {
                info!(artifact = name, path = %path.display(), "report artifact written");
                ArtifactStatus::Written(path)
            }
            Err(e) => {
                error!(artifact = name, error = %e, "report artifact could not be written");
                ArtifactStatus::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
