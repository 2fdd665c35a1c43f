use std::fmt;
use std::path::PathBuf;

/// Terminal state of one image export attempt. There is no retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    NotAttempted,
    /// The renderer started. `image` is set only when the expected file appeared within the wait.
    Launched { tool: String, image: Option<PathBuf> },
    ToolMissing { tool: String },
    LaunchError { tool: String, reason: String },
}

impl ExportOutcome {
    /// True when a renderer was started, whether or not an image was confirmed.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Launched { .. })
    }

    pub fn image(&self) -> Option<&PathBuf> {
        match self {
            Self::Launched { image, .. } => image.as_ref(),
            _ => None,
        }
    }
}

impl fmt::Display for ExportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAttempted => write!(f, "image export not attempted"),
            Self::Launched {
                image: Some(image), ..
            } => write!(f, "image written to {}", image.display()),
            Self::Launched { tool, image: None } => {
                write!(f, "{tool} was launched but no image was confirmed")
            }
            Self::ToolMissing { tool } => write!(f, "{tool} is not available on this host"),
            Self::LaunchError { tool, reason } => {
                write!(f, "{tool} could not be launched: {reason}")
            }
        }
    }
}
