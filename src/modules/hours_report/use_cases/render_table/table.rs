// Table report: one row per employee with total hours, highlighting employees under the threshold.
//
// Output
// - A standalone HTML document. Rows follow the ranking order.
// - Hours are shown with two decimals.
// - Rows below UNDER_HOURS_THRESHOLD carry the `under-hours` class and a red background.
// - An empty ranking renders the header row only.

use crate::modules::hours_report::core::ranking::{RankedEntry, Ranking};
use crate::shared::core::html::escape_html;

pub const TABLE_REPORT_FILE: &str = "EmployeeHoursTable.html";

/// Employees with fewer total hours than this are highlighted.
pub const UNDER_HOURS_THRESHOLD: f64 = 100.0;

const UNDER_HOURS_ROW_ATTRIBUTES: &str = " class='under-hours' style='background-color: #ffcccc;'";

pub fn is_under_hours(entry: &RankedEntry) -> bool {
    entry.total_hours < UNDER_HOURS_THRESHOLD
}

pub fn render_table(ranking: &Ranking) -> String {
    let mut html = String::with_capacity(512 + ranking.len() * 96);

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html>\n<head>\n<meta charset='UTF-8'>\n");
    html.push_str("<title>Employee Hours Report</title>\n</head>\n");
    html.push_str("<body>\n");
    html.push_str("<h1>Employee Hours Report</h1>\n");
    html.push_str("<table border='1'>\n");
    html.push_str("<thead>\n<tr><th>Employee Name</th><th>Total Hours</th></tr>\n</thead>\n");
    html.push_str("<tbody>\n");

    for entry in ranking.entries() {
        let attributes = if is_under_hours(entry) {
            UNDER_HOURS_ROW_ATTRIBUTES
        } else {
            ""
        };
        html.push_str(&format!(
            "<tr{attributes}><td>{}</td><td>{:.2}</td></tr>\n",
            escape_html(&entry.employee_name),
            entry.total_hours
        ));
    }

    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}
