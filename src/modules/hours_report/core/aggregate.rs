// Hours aggregation: fold valid entries into total hours per employee.
//
// Purpose
// - Reduce ValidEntry values into one total per employee name.
//
// Invariants
// - Every stored total is strictly positive because every ValidEntry has a positive duration.
// - The result does not depend on the order entries arrive in (within floating point tolerance).
// - Keys are ordered by name so iteration is deterministic.

use std::collections::BTreeMap;

use crate::modules::hours_report::core::validate::ValidEntry;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeHours {
    totals: BTreeMap<String, f64>,
}

impl EmployeeHours {
    pub fn get(&self, employee_name: &str) -> Option<f64> {
        self.totals.get(employee_name).copied()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.totals.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.totals.iter().map(|(name, hours)| (name.as_str(), *hours))
    }

    fn add(mut self, entry: ValidEntry) -> Self {
        let (employee_name, hours) = entry.into_parts();
        *self.totals.entry(employee_name).or_insert(0.0) += hours;
        self
    }
}

impl FromIterator<ValidEntry> for EmployeeHours {
    fn from_iter<I: IntoIterator<Item = ValidEntry>>(entries: I) -> Self {
        aggregate_hours(entries)
    }
}

pub fn aggregate_hours(entries: impl IntoIterator<Item = ValidEntry>) -> EmployeeHours {
    entries
        .into_iter()
        .fold(EmployeeHours::default(), EmployeeHours::add)
}
