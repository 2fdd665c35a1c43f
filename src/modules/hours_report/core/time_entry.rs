// Raw time entry as delivered by the time tracking source.
//
// Purpose
// - Mirror the transport shape of one record so the source adapters can deserialize it directly.
//
// Timestamps
// - RFC 3339 with an offset is converted to UTC.
// - Timestamps without an offset are already UTC in the source and are read as such.
//
// Boundaries
// - No validation here. Missing names and inverted intervals are handled by the validator.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimeEntry {
    #[serde(rename = "EmployeeName", default)]
    pub employee_name: Option<String>,
    #[serde(rename = "StarTimeUtc", deserialize_with = "utc_timestamp::deserialize")]
    pub start_utc: DateTime<Utc>,
    #[serde(rename = "EndTimeUtc", deserialize_with = "utc_timestamp::deserialize")]
    pub end_utc: DateTime<Utc>,
    #[serde(rename = "EntryNotes", default)]
    pub notes: Option<String>,
    #[serde(
        rename = "DeletedOn",
        default,
        deserialize_with = "utc_timestamp::deserialize_option"
    )]
    pub deleted_on: Option<DateTime<Utc>>,
}

pub mod utc_timestamp {
    use super::*;
    use serde::de::Error;

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
            return Some(with_offset.with_timezone(&Utc));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(|naive| naive.and_utc())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}"))),
        }
    }
}
