//! Capture log orchestration: identifier assignment and listing.

use std::sync::Arc;

use chrono::Utc;
use domains::{Capture, CaptureLog, DomainError, NewCapture, Result};
use tracing::info;

/// Append/list orchestration over the [`CaptureLog`] port.
pub struct LogbookService {
    log: Arc<dyn CaptureLog>,
}

impl LogbookService {
    pub fn new(log: Arc<dyn CaptureLog>) -> Self {
        Self { log }
    }

    /// Assigns a timestamp-derived identifier and prepends the capture.
    ///
    /// The identifier is the current UTC time in milliseconds as a decimal
    /// string. Two appends inside the same millisecond collide; acceptable
    /// for a demo log with no lookup-by-id.
    pub async fn add(&self, submission: NewCapture) -> Result<Capture> {
        let id = Utc::now().timestamp_millis().to_string();
        let capture = submission.into_capture(id);

        self.log
            .prepend(capture.clone())
            .await
            .map_err(DomainError::internal)?;

        info!(id = %capture.id, species = %capture.species, "capture logged");
        Ok(capture)
    }

    /// Returns every capture, most recent first.
    pub async fn list(&self) -> Result<Vec<Capture>> {
        self.log
            .list_newest_first()
            .await
            .map_err(DomainError::internal)
    }
}
