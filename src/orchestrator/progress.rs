use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Interval between simulated progress steps.
const TICK_INTERVAL: Duration = Duration::from_millis(300);
/// Per-tick increment.
const STEP: u8 = 10;
/// The ticker never reports completion; 100 is set by the real response.
const CEILING: u8 = 90;

/// Cosmetic upload-progress ticker. The relay call is atomic from the
/// orchestrator's perspective, so displayed progress is simulated: it climbs
/// from 0 toward 90 in fixed steps until the ticker is stopped. Display
/// state only; it never feeds back into control flow.
pub(crate) struct ProgressTicker {
    handle: JoinHandle<()>,
}

impl ProgressTicker {
    pub(crate) fn start(progress: Arc<AtomicU8>) -> Self {
        progress.store(0, Ordering::Relaxed);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            // The first tick of a tokio interval fires immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                let current = progress.load(Ordering::Relaxed);
                if current >= CEILING {
                    break;
                }
                progress.store((current + STEP).min(CEILING), Ordering::Relaxed);
            }
        });
        Self { handle }
    }

    /// Cancels the ticker the moment the real response arrives.
    pub(crate) fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
