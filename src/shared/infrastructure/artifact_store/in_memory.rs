// In memory implementation of the ArtifactStore port.
//
// Purpose
// - Support use case tests without touching the filesystem.
//
// Responsibilities
// - Keep written documents in a map keyed by name for inspection.
// - Simulate a backend outage, either for every write or for selected names.

use crate::shared::infrastructure::artifact_store::{ArtifactError, ArtifactStore};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryArtifactStore {
    documents: RwLock<HashMap<String, String>>,
    failing: HashSet<String>,
    is_offline: bool,
}

impl InMemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn fail_on(&mut self, name: impl Into<String>) {
        self.failing.insert(name.into());
    }

    pub async fn get(&self, name: &str) -> Option<String> {
        self.documents.read().await.get(name).cloned()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }
}

#[async_trait::async_trait]
impl ArtifactStore for InMemoryArtifactStore {
    async fn write(&self, name: &str, contents: &str) -> Result<PathBuf, ArtifactError> {
        if self.is_offline {
            return Err(ArtifactError::Backend("Artifact store offline".into()));
        }
        if self.failing.contains(name) {
            return Err(ArtifactError::Backend(format!("Artifact store rejected {name}")));
        }

        self.documents
            .write()
            .await
            .insert(name.to_string(), contents.to_string());
        Ok(PathBuf::from(name))
    }
}
