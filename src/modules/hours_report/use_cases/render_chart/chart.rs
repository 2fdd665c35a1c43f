// Chart report: a self-contained HTML document that draws a pie chart on a canvas.
//
// Output
// - Legend: one item per employee with colour box, percentage and hours, both to one decimal.
// - Data series: a JSON array of {name, value, percentage, color} where value is hours rounded
//   to two decimals and percentage is the fraction of the whole rounded to four decimals.
// - Script: slices drawn consecutively from angle 0 in ranking order, each spanning fraction * 2π.
// - A "Download PNG" button that serializes the canvas to CHART_IMAGE_FILE.
//
// Boundaries
// - No rasterization here. The document is consumed by a browser or by the image exporter.
// - A degenerate ranking (zero total hours) is refused with ChartError::NothingToReport.

use serde::Serialize;
use thiserror::Error;

use crate::modules::hours_report::core::ranking::{RankedEntry, Ranking};
use crate::shared::core::html::{escape_html, script_safe_json};

pub const CHART_REPORT_FILE: &str = "pie_chart.html";
pub const CHART_IMAGE_FILE: &str = "EmployeeHoursPieChart.png";

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;
const PIE_RADIUS: u32 = 200;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("nothing to report: total recorded hours is zero")]
    NothingToReport,

    #[error("chart data could not be encoded: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: f64,
    pub percentage: f64,
    pub color: &'static str,
}

impl From<&RankedEntry> for ChartSlice {
    fn from(entry: &RankedEntry) -> Self {
        Self {
            name: entry.employee_name.clone(),
            value: round_to(entry.total_hours, 2),
            percentage: round_to(entry.share(), 4),
            color: entry.color,
        }
    }
}

pub fn chart_slices(ranking: &Ranking) -> Result<Vec<ChartSlice>, ChartError> {
    if ranking.is_degenerate() {
        return Err(ChartError::NothingToReport);
    }
    Ok(ranking.entries().iter().map(ChartSlice::from).collect())
}

pub fn render_chart(ranking: &Ranking) -> Result<String, ChartError> {
    let slices = chart_slices(ranking)?;
    let data = serde_json::to_string(&slices).map_err(|e| ChartError::Encode(e.to_string()))?;

    let mut html = String::with_capacity(4096 + ranking.len() * 256);
    html.push_str(DOCUMENT_HEAD);
    html.push_str(&format!(
        "    <canvas id='pieChart' width='{CANVAS_WIDTH}' height='{CANVAS_HEIGHT}'></canvas>\n"
    ));
    html.push_str("    <div class='legend'>\n        <h3>Legend:</h3>\n");
    for entry in ranking.entries() {
        html.push_str(&legend_item(entry));
    }
    html.push_str("    </div>\n");
    html.push_str("    <script>\n");
    html.push_str(&format!(
        "        const radius = {PIE_RADIUS};\n        const data = {};\n",
        script_safe_json(&data)
    ));
    html.push_str(DRAW_SCRIPT);
    html.push_str("    </script>\n</body>\n</html>\n");
    Ok(html)
}

fn legend_item(entry: &RankedEntry) -> String {
    format!(
        "        <div class='legend-item'>\n            \
         <span class='color-box' style='background-color: {};'></span>\n            \
         {}: {:.1}% ({:.1}h)\n        </div>\n",
        entry.color,
        escape_html(&entry.employee_name),
        entry.percentage_of_total,
        entry.total_hours
    )
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

const DOCUMENT_HEAD: &str = "<!DOCTYPE html>
<html>
<head>
    <meta charset='UTF-8'>
    <title>Employee Hours Pie Chart</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 20px; }
        canvas { border: 1px solid #ccc; }
        .legend { margin-top: 20px; }
        .legend-item { margin: 5px 0; }
        .color-box { display: inline-block; width: 20px; height: 20px; margin-right: 10px; vertical-align: middle; }
    </style>
</head>
<body>
    <h1>Employee Hours Distribution</h1>
";

const DRAW_SCRIPT: &str = "        const canvas = document.getElementById('pieChart');
        const ctx = canvas.getContext('2d');
        const centerX = canvas.width / 2;
        const centerY = canvas.height / 2;

        ctx.font = 'bold 16px Arial';
        ctx.fillStyle = '#333';
        ctx.textAlign = 'center';
        ctx.fillText('Employee Hours Distribution', centerX, 30);

        let startAngle = 0;
        data.forEach((item) => {
            const sliceAngle = item.percentage * 2 * Math.PI;

            ctx.beginPath();
            ctx.moveTo(centerX, centerY);
            ctx.arc(centerX, centerY, radius, startAngle, startAngle + sliceAngle);
            ctx.closePath();
            ctx.fillStyle = item.color;
            ctx.fill();

            ctx.strokeStyle = '#fff';
            ctx.lineWidth = 2;
            ctx.stroke();

            startAngle += sliceAngle;
        });

        const downloadBtn = document.createElement('button');
        downloadBtn.textContent = 'Download PNG';
        downloadBtn.style.marginTop = '20px';
        downloadBtn.style.padding = '10px 20px';
        downloadBtn.style.fontSize = '14px';
        downloadBtn.onclick = function () {
            const link = document.createElement('a');
            link.download = 'EmployeeHoursPieChart.png';
            link.href = canvas.toDataURL('image/png');
            link.click();
        };
        document.body.appendChild(downloadBtn);
";
