// Shared test fixtures for time entries and aggregated hours.
// Compiled into the crate only during tests through `tests::fixtures` in `src/lib.rs`.

use crate::modules::hours_report::core::aggregate::{EmployeeHours, aggregate_hours};
use crate::modules::hours_report::core::time_entry::TimeEntry;
use crate::modules::hours_report::core::validate::validate_entries;
use chrono::{DateTime, TimeDelta, Utc};
use std::fs;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(format!("./src/tests/fixtures/json/{name}"))
}

pub struct TimeEntryBuilder {
    inner: TimeEntry,
}

impl Default for TimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TimeEntryBuilder {
    /// Alice, 2024-01-08 09:00 to 17:00 UTC.
    pub fn new() -> Self {
        let json_str = fs::read_to_string(fixture_path("time_entry.json")).unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn employee(self, name: &str) -> Self {
        self.employee_name(Some(name.to_string()))
    }

    pub fn employee_name(mut self, v: Option<String>) -> Self {
        self.inner.employee_name = v;
        self
    }

    /// Moves the interval, keeping its length.
    pub fn start(mut self, v: DateTime<Utc>) -> Self {
        let length = self.inner.end_utc - self.inner.start_utc;
        self.inner.start_utc = v;
        self.inner.end_utc = v + length;
        self
    }

    /// Sets the length of the interval. Negative values put the end before the start.
    pub fn hours(mut self, v: f64) -> Self {
        let millis = (v * 3_600_000.0).round() as i64;
        self.inner.end_utc = self.inner.start_utc + TimeDelta::milliseconds(millis);
        self
    }

    pub fn minutes(mut self, v: i64) -> Self {
        self.inner.end_utc = self.inner.start_utc + TimeDelta::minutes(v);
        self
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = Some(v.into());
        self
    }

    pub fn deleted(mut self) -> Self {
        self.inner.deleted_on = Some(self.inner.end_utc + TimeDelta::days(1));
        self
    }

    pub fn build(self) -> TimeEntry {
        self.inner
    }
}

/// Aggregated hours for the given (employee, hours) pairs, built through the validator.
pub fn employee_hours(totals: &[(&str, f64)]) -> EmployeeHours {
    let entries: Vec<TimeEntry> = totals
        .iter()
        .map(|(name, hours)| TimeEntryBuilder::new().employee(name).hours(*hours).build())
        .collect();
    aggregate_hours(validate_entries(&entries))
}

#[cfg(test)]
mod time_entry_builder_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = TimeEntryBuilder::default().build();

        assert_eq!(built.employee_name.as_deref(), Some("Alice"));
        assert_eq!(built.start_utc, Utc.with_ymd_and_hms(2024, 1, 8, 9, 0, 0).unwrap());
        assert_eq!(built.end_utc, Utc.with_ymd_and_hms(2024, 1, 8, 17, 0, 0).unwrap());
        assert_eq!(built.deleted_on, None);
    }

    #[rstest]
    fn setters_override_the_interval_and_metadata() {
        let start = Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap();

        let built = TimeEntryBuilder::new()
            .employee("Bob")
            .start(start)
            .hours(1.5)
            .notes("pairing")
            .deleted()
            .build();

        assert_eq!(built.employee_name.as_deref(), Some("Bob"));
        assert_eq!(built.end_utc - built.start_utc, TimeDelta::minutes(90));
        assert_eq!(built.start_utc, start);
        assert_eq!(built.notes.as_deref(), Some("pairing"));
        assert!(built.deleted_on.is_some());
    }
}
