//! # Core Ports
//!
//! Any adapter must implement these traits to be wired into the binary.
//! All three ports are process-local today (in-memory stores, a stubbed
//! detector) but the contracts are written so a real database or model
//! server can slot in behind them later.

use crate::models::{Capture, DetectionReport, UserProfile};
use async_trait::async_trait;
use bytes::Bytes;
use mime::Mime;

/// Account persistence contract, keyed by email.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Looks up a profile by email.
    async fn find(&self, email: &str) -> anyhow::Result<Option<UserProfile>>;

    /// Returns whether a profile with this email already exists.
    async fn contains(&self, email: &str) -> anyhow::Result<bool>;

    /// Inserts a profile. Callers are expected to have checked `contains`
    /// first; the two calls are deliberately not atomic, so concurrent
    /// registrations of the same email can both land.
    async fn insert(&self, profile: UserProfile) -> anyhow::Result<()>;
}

/// Append-only catch log contract. Newest entries come first.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CaptureLog: Send + Sync {
    /// Prepends a capture to the log.
    async fn prepend(&self, capture: Capture) -> anyhow::Result<()>;

    /// Returns the full log, most recent capture first.
    async fn list_newest_first(&self) -> anyhow::Result<Vec<Capture>>;
}

/// Species detection contract for uploaded photos.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait SpeciesDetector: Send + Sync {
    /// Analyzes an uploaded image and reports the detected species.
    async fn detect(
        &self,
        image: Bytes,
        content_type: Option<Mime>,
    ) -> anyhow::Result<DetectionReport>;
}
