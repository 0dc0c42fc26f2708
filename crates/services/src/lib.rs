//! # services
//!
//! Use-case orchestration between the HTTP layer and the domain ports.
//! Each service holds its ports behind `Arc<dyn Trait>` so the binary
//! decides which adapters to wire in.

pub mod auth;
pub mod detection;
pub mod logbook;

pub use auth::AuthService;
pub use detection::DetectionService;
pub use logbook::LogbookService;

/// The fixed credential returned on every successful register/login.
///
/// Carries no session semantics: any client holding it is indistinguishable
/// from any other. A signed, expiring token replaces this before any real
/// deployment.
pub const DEMO_TOKEN: &str = "demo-token";
