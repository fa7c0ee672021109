//! Client-side batch orchestration.
//!
//! Drives a sequence of per-file submissions against the submission relay,
//! strictly one at a time and in selection order. Any failure marks the
//! whole batch Failed and leaves the remaining files unsubmitted. Completed
//! artifacts land in both the current-batch list and the session history;
//! only the former is cleared by a reset.

pub mod history;
mod progress;
pub mod relay_client;

pub use history::SessionHistory;
pub use relay_client::RelayClient;

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

use crate::codec;
use crate::error::{AppError, AppResult};
use crate::models::{ProcessedArtifact, SourceFile};
use progress::ProgressTicker;

/// One submission endpoint the orchestrator can drive. The production
/// implementation is [`RelayClient`]; tests plug in scripted doubles.
pub trait SubmitRelay {
    fn submit(
        &self,
        file: &SourceFile,
    ) -> impl std::future::Future<Output = AppResult<ProcessedArtifact>> + Send;
}

/// Per-batch lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Idle,
    Uploading,
    Processing,
    Complete,
    Failed,
}

pub struct BatchOrchestrator<R: SubmitRelay> {
    relay: R,
    history: SessionHistory,
    batch: Vec<SourceFile>,
    completed: Vec<ProcessedArtifact>,
    state: BatchState,
    progress: Arc<AtomicU8>,
    current_index: usize,
    last_error: Option<String>,
}

impl<R: SubmitRelay> BatchOrchestrator<R> {
    pub fn new(relay: R, history: SessionHistory) -> Self {
        Self {
            relay,
            history,
            batch: Vec::new(),
            completed: Vec::new(),
            state: BatchState::Idle,
            progress: Arc::new(AtomicU8::new(0)),
            current_index: 0,
            last_error: None,
        }
    }

    /// Replaces the current selection wholesale. Every file must carry one
    /// of the two recognized Word media types; an invalid file rejects the
    /// whole selection before any network call.
    pub fn select_files(&mut self, files: Vec<SourceFile>) -> AppResult<()> {
        if let Some(invalid) = files.iter().find(|f| !f.is_word_document()) {
            warn!(
                file_name = %invalid.name,
                media_type = %invalid.media_type,
                "Rejected non-Word file at selection"
            );
            return Err(AppError::validation(
                "Please upload a Word document (.doc or .docx)",
            ));
        }

        info!(file_count = files.len(), "Files selected");
        self.batch = files;
        self.completed.clear();
        self.state = BatchState::Idle;
        self.progress.store(0, Ordering::Relaxed);
        self.current_index = 0;
        self.last_error = None;
        Ok(())
    }

    /// Submits the selected batch, one file at a time, in selection order.
    /// On the first failure the batch transitions to Failed and the
    /// remaining files are left unsubmitted.
    pub async fn submit_batch(&mut self) -> AppResult<()> {
        if self.batch.is_empty() {
            return Err(AppError::validation("No files selected"));
        }

        self.last_error = None;

        for index in 0..self.batch.len() {
            self.current_index = index;
            self.state = BatchState::Uploading;

            let file_name = self.batch[index].name.clone();
            info!(index, file_name = %file_name, "Submitting file");

            let ticker = ProgressTicker::start(Arc::clone(&self.progress));
            let result = self.relay.submit(&self.batch[index]).await;
            ticker.stop();

            match result {
                Ok(artifact) => {
                    self.progress.store(100, Ordering::Relaxed);
                    self.state = BatchState::Processing;
                    info!(
                        index,
                        file_name = %file_name,
                        artifact_name = %artifact.name,
                        "File processed"
                    );
                    self.completed.push(artifact.clone());
                    self.history.push(artifact);
                }
                Err(e) => {
                    warn!(index, file_name = %file_name, error = %e, "Batch submission failed");
                    self.progress.store(0, Ordering::Relaxed);
                    self.state = BatchState::Failed;
                    self.last_error = Some(e.to_string());
                    return Err(e);
                }
            }
        }

        self.state = BatchState::Complete;
        info!(file_count = self.batch.len(), "Batch complete");
        Ok(())
    }

    /// Returns to Idle and clears the working set. The session history is
    /// intentionally retained across resets.
    pub fn reset(&mut self) {
        self.batch.clear();
        self.completed.clear();
        self.state = BatchState::Idle;
        self.progress.store(0, Ordering::Relaxed);
        self.current_index = 0;
        self.last_error = None;
    }

    /// Decodes one completed artifact for download. Available as soon as an
    /// artifact exists, even mid-batch. A failure is recorded as a
    /// batch-level error without changing the batch state.
    pub fn download(&mut self, index: usize) -> AppResult<(Vec<u8>, String)> {
        let artifact = match self.completed.get(index) {
            Some(artifact) => artifact,
            None => {
                let err = AppError::validation(format!("No processed file at index {}", index));
                self.last_error = Some(err.to_string());
                return Err(err);
            }
        };

        match codec::decode(&artifact.encoded_data) {
            Ok(bytes) => Ok((bytes, artifact.name.clone())),
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn state(&self) -> BatchState {
        self.state
    }

    /// Displayed progress for the current file, 0-100.
    pub fn progress(&self) -> u8 {
        self.progress.load(Ordering::Relaxed)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected_files(&self) -> &[SourceFile] {
        &self.batch
    }

    /// Artifacts produced by the current batch, in submission order.
    pub fn artifacts(&self) -> &[ProcessedArtifact] {
        &self.completed
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
