// Result of one report run and the status block printed for the operator.
//
// Purpose
// - Record which artifacts were written, which failed and which were skipped.
// - Carry the image export outcome so the console can say whether a manual screenshot is needed.

use std::fmt;
use std::path::PathBuf;

use crate::modules::hours_report::use_cases::export_image::outcome::ExportOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactStatus {
    Written(PathBuf),
    Failed { reason: String },
    Skipped { reason: String },
}

impl ArtifactStatus {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Written(path) => Some(path),
            _ => None,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub employees: usize,
    pub total_hours: f64,
    pub table: ArtifactStatus,
    pub chart: ArtifactStatus,
    pub image: ExportOutcome,
}

impl ReportSummary {
    /// True when every artifact that could be produced was written.
    pub fn is_complete(&self) -> bool {
        self.table.is_written() && !matches!(self.chart, ArtifactStatus::Failed { .. })
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            ArtifactStatus::Written(path) => writeln!(f, "HTML table created: {}", path.display())?,
            ArtifactStatus::Failed { reason } => writeln!(f, "HTML table failed: {reason}")?,
            ArtifactStatus::Skipped { reason } => writeln!(f, "HTML table skipped: {reason}")?,
        }

        match &self.chart {
            ArtifactStatus::Written(html) => match self.image.image() {
                Some(png) => write!(f, "Pie chart created: {}", png.display()),
                None => {
                    writeln!(f, "Pie chart HTML created: {}", html.display())?;
                    write!(
                        f,
                        "Note: PNG conversion requires additional tools. Open {} in browser and take screenshot.",
                        html.display()
                    )
                }
            },
            ArtifactStatus::Failed { reason } => write!(f, "Pie chart failed: {reason}"),
            ArtifactStatus::Skipped { reason } => {
                let mut chars = reason.chars();
                match chars.next() {
                    Some(first) => write!(f, "{}{}", first.to_uppercase(), chars.as_str()),
                    None => write!(f, "Pie chart skipped"),
                }
            }
        }
    }
}
