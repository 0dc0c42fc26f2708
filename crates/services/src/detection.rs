//! Species detection orchestration over the [`SpeciesDetector`] port.

use std::sync::Arc;

use bytes::Bytes;
use domains::{DetectionReport, DomainError, Result, SpeciesDetector};
use mime::Mime;
use tracing::info;

/// Hands uploaded photos to whichever detector the binary wired in.
pub struct DetectionService {
    detector: Arc<dyn SpeciesDetector>,
}

impl DetectionService {
    pub fn new(detector: Arc<dyn SpeciesDetector>) -> Self {
        Self { detector }
    }

    /// Runs detection on an uploaded image.
    pub async fn detect(
        &self,
        image: Bytes,
        content_type: Option<Mime>,
    ) -> Result<DetectionReport> {
        info!(
            bytes = image.len(),
            content_type = content_type.as_ref().map(Mime::essence_str),
            "running species detection"
        );
        self.detector
            .detect(image, content_type)
            .await
            .map_err(DomainError::internal)
    }
}
