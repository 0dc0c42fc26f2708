//! In-memory adapters backing the [`UserStore`] and [`CaptureLog`] ports.
//!
//! These replace the module-level globals of the original demo with injected
//! state, so tests get isolated stores and a real database can replace them
//! without touching the services.

use async_trait::async_trait;
use dashmap::DashMap;
use domains::{Capture, CaptureLog, UserProfile, UserStore};
use tokio::sync::RwLock;
use tracing::debug;

/// Profile map keyed by email, alive for the process lifetime.
///
/// Each `UserStore` method is individually consistent, but `contains` and
/// `insert` are separate calls by contract, so the duplicate-email check
/// in the auth service is not atomic across concurrent registrations.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: DashMap<String, UserProfile>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find(&self, email: &str) -> anyhow::Result<Option<UserProfile>> {
        Ok(self.users.get(email).map(|entry| entry.value().clone()))
    }

    async fn contains(&self, email: &str) -> anyhow::Result<bool> {
        Ok(self.users.contains_key(email))
    }

    async fn insert(&self, profile: UserProfile) -> anyhow::Result<()> {
        debug!(email = %profile.email, "storing profile");
        self.users.insert(profile.email.clone(), profile);
        Ok(())
    }
}

/// Append-only capture sequence, newest first, unbounded.
#[derive(Debug, Default)]
pub struct InMemoryCaptureLog {
    captures: RwLock<Vec<Capture>>,
}

impl InMemoryCaptureLog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CaptureLog for InMemoryCaptureLog {
    async fn prepend(&self, capture: Capture) -> anyhow::Result<()> {
        self.captures.write().await.insert(0, capture);
        Ok(())
    }

    async fn list_newest_first(&self) -> anyhow::Result<Vec<Capture>> {
        Ok(self.captures.read().await.clone())
    }
}
