use std::sync::{Arc, Mutex};

use crate::models::ProcessedArtifact;

/// Session-scoped append-only log of processed artifacts. Outlives batch
/// resets; created by the caller and handed to the orchestrator, never
/// global state.
#[derive(Clone, Default)]
pub struct SessionHistory {
    entries: Arc<Mutex<Vec<ProcessedArtifact>>>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, artifact: ProcessedArtifact) {
        self.entries.lock().expect("history lock").push(artifact);
    }

    pub fn snapshot(&self) -> Vec<ProcessedArtifact> {
        self.entries.lock().expect("history lock").clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("history lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
