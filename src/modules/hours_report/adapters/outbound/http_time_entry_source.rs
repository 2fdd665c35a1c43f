// TimeEntrySource fetching the JSON entry list from an HTTP endpoint.
//
// Responsibilities
// - Bound every attempt with a request timeout.
// - Retry transient failures (timeouts, transport errors, 5xx and 429) up to the retry
//   budget, backing off linearly between attempts.
// - Fail immediately on anything else, including a body that is not an entry list.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::modules::hours_report::core::time_entry::TimeEntry;
use crate::modules::hours_report::use_cases::generate_report::source_port::{
    SourceError, TimeEntrySource,
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_RETRIES: u32 = 2;
const DEFAULT_BACKOFF: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct HttpTimeEntrySource {
    client: Client,
    url: String,
    retries: u32,
    backoff: Duration,
}

impl HttpTimeEntrySource {
    pub fn new(
        url: impl Into<String>,
        timeout: Duration,
        retries: u32,
    ) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
            retries,
            backoff: DEFAULT_BACKOFF,
        })
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    async fn fetch_once(&self, attempt: u32) -> Result<Vec<TimeEntry>, SourceError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout { attempts: attempt }
            } else {
                SourceError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout { attempts: attempt }
            } else {
                SourceError::Transport(e.to_string())
            }
        })?;
        serde_json::from_str(&body).map_err(|e| SourceError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl TimeEntrySource for HttpTimeEntrySource {
    async fn fetch(&self) -> Result<Vec<TimeEntry>, SourceError> {
        let attempts = self.retries.saturating_add(1);
        let mut attempt = 1;
        loop {
            match self.fetch_once(attempt).await {
                Ok(entries) => {
                    info!(count = entries.len(), attempt, "time entries fetched");
                    return Ok(entries);
                }
                Err(e) if e.is_transient() && attempt < attempts => {
                    debug!(attempt, error = %e, "fetching time entries failed, retrying");
                    tokio::time::sleep(self.backoff * attempt).await;
                    attempt += 1;
                }
                Err(e) => {
                    warn!(attempt, error = %e, "fetching time entries failed");
                    return Err(e);
                }
            }
        }
    }
}
