// Report ranking: order employees by total hours and derive the values both reports display.
//
// Ordering
// - Total hours descending.
// - Ties are broken by employee name ascending, so equal totals always render in the same order.
//
// Degenerate aggregate
// - When the total across all employees is zero there is nothing to divide by.
//   Every percentage is 0 and `is_degenerate` is true. Callers decide what to skip.

use crate::modules::hours_report::core::aggregate::EmployeeHours;
use crate::modules::hours_report::core::palette::color_for_rank;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub employee_name: String,
    pub total_hours: f64,
    pub rank: usize,
    pub percentage_of_total: f64,
    pub color: &'static str,
}

impl RankedEntry {
    /// Fraction of the whole, in `0.0..=1.0`.
    pub fn share(&self) -> f64 {
        self.percentage_of_total / 100.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    entries: Vec<RankedEntry>,
    total_hours: f64,
}

impl Ranking {
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn total_hours(&self) -> f64 {
        self.total_hours
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_degenerate(&self) -> bool {
        self.total_hours <= 0.0
    }
}

pub fn rank_employees(hours: &EmployeeHours) -> Ranking {
    let total_hours = hours.total();

    let mut sorted: Vec<(&str, f64)> = hours.iter().collect();
    sorted.sort_by(|(left_name, left_hours), (right_name, right_hours)| {
        right_hours
            .total_cmp(left_hours)
            .then_with(|| left_name.cmp(right_name))
    });

    let entries = sorted
        .into_iter()
        .enumerate()
        .map(|(rank, (employee_name, total))| RankedEntry {
            employee_name: employee_name.to_string(),
            total_hours: total,
            rank,
            percentage_of_total: percentage_of(total, total_hours),
            color: color_for_rank(rank),
        })
        .collect();

    Ranking {
        entries,
        total_hours,
    }
}

fn percentage_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}
