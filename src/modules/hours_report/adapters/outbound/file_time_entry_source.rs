// TimeEntrySource reading a JSON export from the local filesystem.
//
// The file has the same shape as the HTTP response: a JSON array of time entries.

use std::path::PathBuf;

use crate::modules::hours_report::core::time_entry::TimeEntry;
use crate::modules::hours_report::use_cases::generate_report::source_port::{
    SourceError, TimeEntrySource,
};

#[derive(Debug, Clone)]
pub struct FileTimeEntrySource {
    path: PathBuf,
}

impl FileTimeEntrySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl TimeEntrySource for FileTimeEntrySource {
    async fn fetch(&self) -> Result<Vec<TimeEntry>, SourceError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Read {
                path: self.path.display().to_string(),
                source,
            })?;
        let entries: Vec<TimeEntry> =
            serde_json::from_str(&raw).map_err(|e| SourceError::Decode(e.to_string()))?;
        tracing::info!(
            path = %self.path.display(),
            count = entries.len(),
            "time entries loaded from file"
        );
        Ok(entries)
    }
}
