// Port for writing report artifacts.
//
// Purpose
// - Let the report use case persist documents without knowing where they end up.
//
// Responsibilities
// - Write one named document per call and return the path it can be opened from.
// - Each write is independent. A failed write must not affect other writes.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to write {name}: {source}")]
    Write {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ArtifactStore: Send + Sync {
    async fn write(&self, name: &str, contents: &str) -> Result<PathBuf, ArtifactError>;
}

pub mod filesystem;
pub mod in_memory;
