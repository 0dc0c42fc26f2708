//! # DomainError
//!
//! Centralized error handling for the Fishlog services.
//!
//! Domain-level failures (duplicate registration, bad login) are reported to
//! clients inside an HTTP-200 envelope with `ok: false`, so the `Display`
//! strings here double as the client-facing messages and stay in the
//! mobile app's language.

use thiserror::Error;

/// The primary error type for all service operations.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Registration attempted with an email that is already taken.
    #[error("Email déjà utilisé")]
    DuplicateEmail,

    /// Login with an unknown email or a wrong password. The two cases are
    /// deliberately indistinguishable to the caller.
    #[error("Email ou mot de passe incorrect")]
    InvalidCredentials,

    /// Infrastructure failure (store or detector unavailable).
    #[error("internal service error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Wraps an adapter-level failure.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A specialized Result type for Fishlog service logic.
pub type Result<T> = std::result::Result<T, DomainError>;
