//! # api-adapters
//!
//! The web routing and orchestration layer for Fishlog.
//!
//! Wire DTOs and the shared handler state are always available; the axum
//! routing itself sits behind the `web-axum` feature so alternative web
//! frontends can reuse the same state and DTOs.

pub mod dto;
pub mod state;

#[cfg(feature = "web-axum")]
pub mod handlers;
#[cfg(feature = "web-axum")]
pub mod router;

pub use state::AppState;

#[cfg(feature = "web-axum")]
pub use router::router;
