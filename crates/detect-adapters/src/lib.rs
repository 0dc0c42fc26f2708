//! # detect-adapters
//!
//! Implementations of the [`SpeciesDetector`] port. The only adapter today
//! is [`StubDetector`], which stands in for the model server during app
//! development: it ignores the image entirely and answers with one fixed
//! report, so the mobile client can build its detection screen against a
//! stable contract.

use async_trait::async_trait;
use bytes::Bytes;
use domains::{DetectionReport, SpeciesDetector};
use mime::Mime;
use tracing::debug;

/// Canned detection answer, stable regardless of input.
const SPECIES: &str = "Sardine commune";
const SIZE_CM: u32 = 32;
const WEIGHT_G: u32 = 280;
const RULE: &str = "Taille minimale respectée (20 cm).";
const CONFIDENCE: f64 = 0.91;

/// A detector that always reports a legal-size common sardine.
#[derive(Debug, Default)]
pub struct StubDetector;

impl StubDetector {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpeciesDetector for StubDetector {
    async fn detect(
        &self,
        image: Bytes,
        content_type: Option<Mime>,
    ) -> anyhow::Result<DetectionReport> {
        debug!(
            bytes = image.len(),
            content_type = content_type.as_ref().map(Mime::essence_str),
            "stub detector ignoring upload"
        );
        Ok(DetectionReport {
            species: SPECIES.to_string(),
            size_cm: SIZE_CM,
            weight_g: WEIGHT_G,
            legal: true,
            rule: RULE.to_string(),
            confidence: CONFIDENCE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stub_answer_does_not_vary_with_input() {
        let detector = StubDetector::new();

        let from_jpeg = detector
            .detect(Bytes::from_static(b"\xff\xd8\xff"), Some(mime::IMAGE_JPEG))
            .await
            .unwrap();
        let from_nothing = detector.detect(Bytes::new(), None).await.unwrap();

        assert_eq!(from_jpeg, from_nothing);
        assert_eq!(from_jpeg.species, "Sardine commune");
        assert_eq!(from_jpeg.confidence, 0.91);
        assert!(from_jpeg.legal);
    }
}
