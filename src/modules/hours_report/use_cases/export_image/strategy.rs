// Platform specific ways to turn the chart document into an image.
//
// Strategies
// - HeadlessBrowser: a Chromium family browser taking a headless screenshot. Linux, other Unix.
// - ScriptedBrowser: PowerShell driving a WebBrowser control. Windows.
// - GuiLaunch: opens the document in Safari for a manual screenshot. macOS.
//
// Each strategy lists the invocations to try in order. The first one that starts wins.
// Only strategies that write the image themselves report `produces_image`.

use std::path::Path;

use crate::modules::hours_report::use_cases::render_chart::chart::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::shared::infrastructure::process_launcher::Invocation;

pub trait ExportStrategy: Send + Sync {
    fn tool(&self) -> &'static str;

    fn invocations(&self, chart: &Path, image: &Path) -> Vec<Invocation>;

    fn produces_image(&self) -> bool;
}

const CHROMIUM_BINARIES: [&str; 4] = [
    "google-chrome",
    "google-chrome-stable",
    "chromium",
    "chromium-browser",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessBrowser;

impl ExportStrategy for HeadlessBrowser {
    fn tool(&self) -> &'static str {
        "headless chrome"
    }

    fn invocations(&self, chart: &Path, image: &Path) -> Vec<Invocation> {
        CHROMIUM_BINARIES
            .iter()
            .map(|binary| {
                Invocation::new(*binary)
                    .arg("--headless")
                    .arg("--disable-gpu")
                    .arg(format!("--screenshot={}", image.display()))
                    .arg(format!("--window-size={CANVAS_WIDTH},{CANVAS_HEIGHT}"))
                    .arg(chart.display().to_string())
            })
            .collect()
    }

    fn produces_image(&self) -> bool {
        true
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptedBrowser;

impl ExportStrategy for ScriptedBrowser {
    fn tool(&self) -> &'static str {
        "powershell"
    }

    fn invocations(&self, chart: &Path, _image: &Path) -> Vec<Invocation> {
        let location = file_url(chart).replace('\'', "''");
        let script = format!(
            "Add-Type -AssemblyName System.Windows.Forms; \
             [System.Windows.Forms.Application]::EnableVisualStyles(); \
             $web = New-Object System.Windows.Forms.WebBrowser; \
             $web.DocumentCompleted += {{ \
             $web.Document.Window.Size = New-Object System.Drawing.Size({CANVAS_WIDTH}, {CANVAS_HEIGHT}); \
             $web.Document.ExecCommand('Print', $false, $null) }}; \
             $web.Navigate('{location}')"
        );
        vec![
            Invocation::new("powershell")
                .arg("-NoProfile")
                .arg("-Command")
                .arg(script),
        ]
    }

    fn produces_image(&self) -> bool {
        false
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GuiLaunch;

impl ExportStrategy for GuiLaunch {
    fn tool(&self) -> &'static str {
        "safari"
    }

    fn invocations(&self, chart: &Path, _image: &Path) -> Vec<Invocation> {
        vec![
            Invocation::new("open")
                .arg("-a")
                .arg("Safari")
                .arg(chart.display().to_string()),
        ]
    }

    fn produces_image(&self) -> bool {
        false
    }
}

/// `file:///` URL for a local document. Windows verbatim prefixes are dropped and separators
/// normalised, since browser controls cannot open `\\?\` paths.
pub fn file_url(path: &Path) -> String {
    let raw = path.display().to_string();
    let raw = if let Some(share) = raw.strip_prefix(r"\\?\UNC\") {
        format!("//{share}")
    } else if let Some(local) = raw.strip_prefix(r"\\?\") {
        local.to_string()
    } else {
        raw
    };
    let normalised = raw.replace('\\', "/");
    match normalised.strip_prefix("//") {
        Some(share) => format!("file://{share}"),
        None => format!("file:///{}", normalised.trim_start_matches('/')),
    }
}

/// Pick the strategy for an operating system name as reported by `std::env::consts::OS`.
pub fn strategy_for(os: &str) -> Box<dyn ExportStrategy> {
    match os {
        "windows" => Box::new(ScriptedBrowser),
        "macos" => Box::new(GuiLaunch),
        _ => Box::new(HeadlessBrowser),
    }
}

pub fn strategy_for_current_platform() -> Box<dyn ExportStrategy> {
    strategy_for(std::env::consts::OS)
}
