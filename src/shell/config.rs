// Runtime configuration read from the environment.
//
// Variables
// - HOURS_REPORT_SOURCE_URL / HOURS_REPORT_SOURCE_FILE: where the entries come from. One is
//   required, the file wins when both are set.
// - HOURS_REPORT_OUTPUT_DIR: artifact directory, defaults to the working directory.
// - HOURS_REPORT_FETCH_TIMEOUT_SECS, HOURS_REPORT_FETCH_RETRIES: HTTP budget.
// - HOURS_REPORT_IMAGE_WAIT_MS: how long to wait for the PNG, 0 disables the wait.
//
// Empty values count as unset. Parsing goes through a lookup function so tests never touch
// the process env.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::modules::hours_report::adapters::outbound::http_time_entry_source::{
    DEFAULT_RETRIES, DEFAULT_TIMEOUT,
};
use crate::modules::hours_report::use_cases::export_image::exporter::DEFAULT_IMAGE_WAIT;

pub const SOURCE_URL: &str = "HOURS_REPORT_SOURCE_URL";
pub const SOURCE_FILE: &str = "HOURS_REPORT_SOURCE_FILE";
pub const OUTPUT_DIR: &str = "HOURS_REPORT_OUTPUT_DIR";
pub const FETCH_TIMEOUT_SECS: &str = "HOURS_REPORT_FETCH_TIMEOUT_SECS";
pub const FETCH_RETRIES: &str = "HOURS_REPORT_FETCH_RETRIES";
pub const IMAGE_WAIT_MS: &str = "HOURS_REPORT_IMAGE_WAIT_MS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no time entry source configured, set HOURS_REPORT_SOURCE_URL or HOURS_REPORT_SOURCE_FILE")]
    MissingSource,

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Http { url: String },
    File { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: SourceConfig,
    pub output_dir: PathBuf,
    pub fetch_timeout: Duration,
    pub fetch_retries: u32,
    pub image_wait: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let source = match (value(SOURCE_FILE), value(SOURCE_URL)) {
            (Some(path), _) => SourceConfig::File { path: path.into() },
            (None, Some(url)) => SourceConfig::Http { url },
            (None, None) => return Err(ConfigError::MissingSource),
        };

        let fetch_timeout = match value(FETCH_TIMEOUT_SECS) {
            Some(raw) => match parse::<u64>(FETCH_TIMEOUT_SECS, &raw)? {
                0 => {
                    return Err(ConfigError::Invalid {
                        key: FETCH_TIMEOUT_SECS,
                        value: raw,
                    });
                }
                secs => Duration::from_secs(secs),
            },
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            source,
            output_dir: value(OUTPUT_DIR).map_or_else(|| PathBuf::from("."), PathBuf::from),
            fetch_timeout,
            fetch_retries: value(FETCH_RETRIES)
                .map(|raw| parse(FETCH_RETRIES, &raw))
                .transpose()?
                .unwrap_or(DEFAULT_RETRIES),
            image_wait: value(IMAGE_WAIT_MS)
                .map(|raw| parse(IMAGE_WAIT_MS, &raw).map(Duration::from_millis))
                .transpose()?
                .unwrap_or(DEFAULT_IMAGE_WAIT),
        })
    }
}

fn parse<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}
