// Record validation: turn raw time entries into valid (employee, duration) pairs.
//
// Rules
// - The employee name must be non-empty after trimming. The trimmed name is kept.
// - The duration (end - start) must be strictly positive. The source is known to contain
//   inverted and zero-length intervals.
// - Invalid entries are filtered out, never reported as errors.
// - DeletedOn does not affect inclusion.
//
// Boundaries
// - Pure. No input or output.

use chrono::TimeDelta;

use crate::modules::hours_report::core::time_entry::TimeEntry;

const SECONDS_PER_HOUR: f64 = 3_600.0;
const NANOS_PER_HOUR: f64 = 3_600_000_000_000.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEntry {
    employee_name: String,
    duration: TimeDelta,
}

impl ValidEntry {
    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    pub fn hours(&self) -> f64 {
        self.duration.num_seconds() as f64 / SECONDS_PER_HOUR
            + f64::from(self.duration.subsec_nanos()) / NANOS_PER_HOUR
    }

    pub fn into_parts(self) -> (String, f64) {
        let hours = self.hours();
        (self.employee_name, hours)
    }
}

pub fn validate_entry(entry: &TimeEntry) -> Option<ValidEntry> {
    let employee_name = entry.employee_name.as_deref()?.trim();
    if employee_name.is_empty() {
        return None;
    }
    let duration = entry.end_utc - entry.start_utc;
    if duration <= TimeDelta::zero() {
        return None;
    }
    Some(ValidEntry {
        employee_name: employee_name.to_string(),
        duration,
    })
}

pub fn validate_entries(entries: &[TimeEntry]) -> impl Iterator<Item = ValidEntry> + '_ {
    entries.iter().filter_map(validate_entry)
}
