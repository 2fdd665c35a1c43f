// Filesystem implementation of the ArtifactStore port.
//
// Responsibilities
// - Write documents into a single output directory, creating it when missing.
// - Return absolute paths so external tools can open the files from any working directory.
//   The paths are made absolute without canonicalizing, which on Windows would add a `\\?\`
//   prefix that browsers cannot open.

use crate::shared::infrastructure::artifact_store::{ArtifactError, ArtifactStore};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileSystemArtifactStore {
    root: PathBuf,
}

impl FileSystemArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait::async_trait]
impl ArtifactStore for FileSystemArtifactStore {
    async fn write(&self, name: &str, contents: &str) -> Result<PathBuf, ArtifactError> {
        let write_error = |source: std::io::Error| ArtifactError::Write {
            name: name.to_string(),
            source,
        };

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(write_error)?;
        let path = self.root.join(name);
        tokio::fs::write(&path, contents)
            .await
            .map_err(write_error)?;
        let path = std::path::absolute(&path).unwrap_or(path);
        tracing::debug!(path = %path.display(), bytes = contents.len(), "artifact written");
        Ok(path)
    }
}
