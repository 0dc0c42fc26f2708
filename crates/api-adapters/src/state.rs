//! Shared handler state.

use std::sync::Arc;

use detect_adapters::StubDetector;
use services::{AuthService, DetectionService, LogbookService};
use storage_adapters::{InMemoryCaptureLog, InMemoryUserStore};
use tracing::debug;

/// Services shared across all request handlers.
///
/// Cloning is cheap: every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub logbook: Arc<LogbookService>,
    pub detection: Arc<DetectionService>,
}

impl AppState {
    pub fn new(
        auth: Arc<AuthService>,
        logbook: Arc<LogbookService>,
        detection: Arc<DetectionService>,
    ) -> Self {
        Self {
            auth,
            logbook,
            detection,
        }
    }

    /// Assembles the demo stack: in-memory stores and the stub detector.
    ///
    /// Used by the binary and by tests; each call gets fresh, isolated
    /// state.
    pub fn in_memory() -> Self {
        debug!("assembling in-memory demo stack");
        Self::new(
            Arc::new(AuthService::new(Arc::new(InMemoryUserStore::new()))),
            Arc::new(LogbookService::new(Arc::new(InMemoryCaptureLog::new()))),
            Arc::new(DetectionService::new(Arc::new(StubDetector::new()))),
        )
    }
}
