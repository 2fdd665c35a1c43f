// Port for obtaining the raw time entries a report is built from.
//
// Purpose
// - Keep the report pipeline independent of how entries are fetched (HTTP, file, memory).
//
// Error policy
// - Any failure here is fatal for the run. The use case aborts before writing artifacts.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::hours_report::core::time_entry::TimeEntry;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request timed out after {attempts} attempt(s)")]
    Timeout { attempts: u32 },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected response status {status}")]
    Status { status: u16 },

    #[error("could not decode time entries: {0}")]
    Decode(String),

    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

impl SourceError {
    /// Whether another attempt could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Transport(_) => true,
            Self::Status { status } => *status >= 500 || *status == 429,
            Self::Decode(_) | Self::Read { .. } | Self::Backend(_) => false,
        }
    }
}

#[async_trait]
pub trait TimeEntrySource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<TimeEntry>, SourceError>;
}
