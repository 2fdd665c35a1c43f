// In memory implementation of the TimeEntrySource port.
//
// Purpose
// - Feed the report use case from prepared entries in tests.
// - Simulate an unreachable source to exercise the fatal path.

use crate::modules::hours_report::core::time_entry::TimeEntry;
use crate::modules::hours_report::use_cases::generate_report::source_port::{
    SourceError, TimeEntrySource,
};

#[derive(Default)]
pub struct InMemoryTimeEntrySource {
    entries: Vec<TimeEntry>,
    is_offline: bool,
}

impl InMemoryTimeEntrySource {
    pub fn new(entries: Vec<TimeEntry>) -> Self {
        Self {
            entries,
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl TimeEntrySource for InMemoryTimeEntrySource {
    async fn fetch(&self) -> Result<Vec<TimeEntry>, SourceError> {
        if self.is_offline {
            return Err(SourceError::Backend("Time entry source offline".into()));
        }
        Ok(self.entries.clone())
    }
}
