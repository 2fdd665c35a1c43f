use crate::modules::hours_report::adapters::outbound::file_time_entry_source::FileTimeEntrySource;
use crate::modules::hours_report::adapters::outbound::http_time_entry_source::HttpTimeEntrySource;
use crate::modules::hours_report::use_cases::export_image::exporter::ImageExporter;
use crate::modules::hours_report::use_cases::generate_report::handler::GenerateReportHandler;
use crate::modules::hours_report::use_cases::generate_report::source_port::{
    SourceError, TimeEntrySource,
};
use crate::shared::infrastructure::artifact_store::filesystem::FileSystemArtifactStore;
use crate::shared::infrastructure::process_launcher::system::SystemProcessLauncher;
use crate::shell::config::{Config, SourceConfig};
use std::sync::Arc;

pub type ReportHandler =
    GenerateReportHandler<dyn TimeEntrySource, FileSystemArtifactStore, SystemProcessLauncher>;

pub fn build_report_handler(config: &Config) -> Result<ReportHandler, SourceError> {
    let source: Arc<dyn TimeEntrySource> = match &config.source {
        SourceConfig::Http { url } => Arc::new(HttpTimeEntrySource::new(
            url.clone(),
            config.fetch_timeout,
            config.fetch_retries,
        )?),
        SourceConfig::File { path } => Arc::new(FileTimeEntrySource::new(path.clone())),
    };
    let store = Arc::new(FileSystemArtifactStore::new(config.output_dir.clone()));
    let exporter = ImageExporter::for_current_platform(Arc::new(SystemProcessLauncher))
        .with_image_wait(config.image_wait);

    Ok(GenerateReportHandler::new(source, store, exporter))
}
