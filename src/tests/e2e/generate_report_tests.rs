use crate::modules::hours_report::adapters::outbound::file_time_entry_source::FileTimeEntrySource;
use crate::modules::hours_report::adapters::outbound::in_memory_time_entry_source::InMemoryTimeEntrySource;
use crate::modules::hours_report::use_cases::export_image::exporter::ImageExporter;
use crate::modules::hours_report::use_cases::export_image::outcome::ExportOutcome;
use crate::modules::hours_report::use_cases::export_image::strategy::{GuiLaunch, HeadlessBrowser};
use crate::modules::hours_report::use_cases::generate_report::handler::{
    ApplicationError, GenerateReportHandler,
};
use crate::modules::hours_report::use_cases::generate_report::source_port::TimeEntrySource;
use crate::modules::hours_report::use_cases::generate_report::summary::ArtifactStatus;
use crate::modules::hours_report::use_cases::render_chart::chart::{
    CHART_IMAGE_FILE, CHART_REPORT_FILE,
};
use crate::modules::hours_report::use_cases::render_table::table::TABLE_REPORT_FILE;
use crate::shared::infrastructure::artifact_store::filesystem::FileSystemArtifactStore;
use crate::shared::infrastructure::artifact_store::in_memory::InMemoryArtifactStore;
use crate::shared::infrastructure::process_launcher::in_memory::InMemoryProcessLauncher;
use crate::tests::fixtures::time_entries::{TimeEntryBuilder, fixture_path};
use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};
use std::sync::Arc;
use std::time::Duration;

const FLAGGED_ROW: &str = "<tr class='under-hours' style='background-color: #ffcccc;'>";

#[fixture]
fn alice_and_bob() -> InMemoryTimeEntrySource {
    let nine = Utc.with_ymd_and_hms(2024, 1, 8, 9, 0, 0).unwrap();
    let ten = Utc.with_ymd_and_hms(2024, 1, 8, 10, 0, 0).unwrap();
    InMemoryTimeEntrySource::new(vec![
        TimeEntryBuilder::new().employee("Alice").start(nine).hours(8.0).build(),
        TimeEntryBuilder::new().employee("Bob").start(nine).hours(1.0).build(),
        TimeEntryBuilder::new().employee("Bob").start(ten).hours(-1.0).build(),
    ])
}

#[rstest]
#[tokio::test]
async fn it_should_rank_alice_before_bob_and_flag_both(alice_and_bob: InMemoryTimeEntrySource) {
    let store = Arc::new(InMemoryArtifactStore::new());
    let launcher = Arc::new(InMemoryProcessLauncher::new());
    let exporter = ImageExporter::new(Box::new(GuiLaunch), launcher);
    let handler = GenerateReportHandler::new(Arc::new(alice_and_bob), store.clone(), exporter);

    let summary = handler.handle().await.expect("handle failed");

    assert_eq!(summary.employees, 2);
    assert!((summary.total_hours - 9.0).abs() < 1e-9);

    let table = store.get(TABLE_REPORT_FILE).await.expect("table written");
    assert!(table.contains(&format!("{FLAGGED_ROW}<td>Alice</td><td>8.00</td></tr>")));
    assert!(table.contains(&format!("{FLAGGED_ROW}<td>Bob</td><td>1.00</td></tr>")));

    let chart = store.get(CHART_REPORT_FILE).await.expect("chart written");
    let alice = chart.find("Alice: 88.9% (8.0h)").expect("alice in legend");
    let bob = chart.find("Bob: 11.1% (1.0h)").expect("bob in legend");
    assert!(alice < bob);
}

#[rstest]
#[tokio::test]
async fn it_should_write_nothing_when_the_entries_cannot_be_obtained() {
    let temp = tempfile::tempdir().expect("temp dir");
    let output = temp.path().join("reports");
    let source: Arc<dyn TimeEntrySource> =
        Arc::new(FileTimeEntrySource::new(temp.path().join("missing.json")));
    let launcher = Arc::new(InMemoryProcessLauncher::new());
    let handler = GenerateReportHandler::new(
        source,
        Arc::new(FileSystemArtifactStore::new(&output)),
        ImageExporter::new(Box::new(HeadlessBrowser), launcher.clone()),
    );

    let result = handler.handle().await;

    assert!(matches!(result, Err(ApplicationError::Source(_))));
    assert!(!output.exists());
    assert!(launcher.launched().is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_generate_reports_from_a_json_export_on_disk() {
    let temp = tempfile::tempdir().expect("temp dir");
    let launcher = Arc::new(
        InMemoryProcessLauncher::new()
            .with_missing("google-chrome")
            .with_missing("google-chrome-stable")
            .with_missing("chromium")
            .with_missing("chromium-browser"),
    );
    let handler = GenerateReportHandler::new(
        Arc::new(FileTimeEntrySource::new(fixture_path("time_entries.json"))),
        Arc::new(FileSystemArtifactStore::new(temp.path())),
        ImageExporter::new(Box::new(HeadlessBrowser), launcher).with_image_wait(Duration::ZERO),
    );

    let summary = handler.handle().await.expect("handle failed");

    assert_eq!(summary.employees, 3);
    assert!((summary.total_hours - 11.5).abs() < 1e-9);
    assert_eq!(
        summary.image,
        ExportOutcome::ToolMissing {
            tool: "headless chrome".into()
        }
    );
    assert!(temp.path().join(TABLE_REPORT_FILE).exists());
    assert!(temp.path().join(CHART_REPORT_FILE).exists());
    assert!(!temp.path().join(CHART_IMAGE_FILE).exists());

    let table = std::fs::read_to_string(temp.path().join(TABLE_REPORT_FILE)).unwrap();
    let alice = table.find("<td>Alice</td><td>8.00</td>").expect("alice row");
    let carol = table.find("<td>Carol</td><td>2.50</td>").expect("carol row");
    let bob = table.find("<td>Bob</td><td>1.00</td>").expect("bob row");
    assert!(alice < carol && carol < bob);

    let status = summary.to_string();
    assert!(status.contains("HTML table created: "));
    assert!(status.contains("Note: PNG conversion requires additional tools."));
}

#[rstest]
#[tokio::test]
async fn it_should_report_nothing_to_report_when_every_entry_is_invalid() {
    let source = InMemoryTimeEntrySource::new(vec![
        TimeEntryBuilder::new().employee("Alice").hours(0.0).build(),
        TimeEntryBuilder::new().employee("   ").hours(4.0).build(),
    ]);
    let store = Arc::new(InMemoryArtifactStore::new());
    let launcher = Arc::new(InMemoryProcessLauncher::new());
    let handler = GenerateReportHandler::new(
        Arc::new(source),
        store.clone(),
        ImageExporter::new(Box::new(GuiLaunch), launcher.clone()),
    );

    let summary = handler.handle().await.expect("handle failed");

    assert!(summary.table.is_written());
    assert!(matches!(summary.chart, ArtifactStatus::Skipped { .. }));
    assert!(summary.to_string().ends_with("Nothing to report: total recorded hours is zero"));
    assert!(store.get(CHART_REPORT_FILE).await.is_none());
    assert!(launcher.launched().is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_keep_the_table_when_the_chart_cannot_be_written(
    alice_and_bob: InMemoryTimeEntrySource,
) {
    let mut store = InMemoryArtifactStore::new();
    store.fail_on(CHART_REPORT_FILE);
    let store = Arc::new(store);
    let handler = GenerateReportHandler::new(
        Arc::new(alice_and_bob),
        store.clone(),
        ImageExporter::new(Box::new(GuiLaunch), Arc::new(InMemoryProcessLauncher::new())),
    );

    let summary = handler.handle().await.expect("handle failed");

    assert!(store.get(TABLE_REPORT_FILE).await.is_some());
    assert!(summary.to_string().contains("Pie chart failed: "));
    assert!(!summary.is_complete());
}
