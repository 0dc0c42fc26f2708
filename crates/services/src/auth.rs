//! Registration and login against the [`UserStore`] port.
//!
//! This is the demo flow: passwords are compared verbatim against what was
//! stored at registration, and no session is created. Real credential
//! handling (salted hashing, constant-time comparison) belongs in a
//! dedicated auth adapter if this ever grows past a demo.

use std::sync::Arc;

use domains::{DomainError, PublicUser, Result, UserProfile, UserStore};
use tracing::{debug, info};

/// Registration/login orchestration.
pub struct AuthService {
    users: Arc<dyn UserStore>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Registers a new profile, rejecting emails already in the store.
    ///
    /// The existence check and the insert are two separate store calls, so
    /// two concurrent registrations of the same email can both succeed.
    /// Known gap, kept as-is for the demo.
    pub async fn register(&self, profile: UserProfile) -> Result<PublicUser> {
        if self
            .users
            .contains(&profile.email)
            .await
            .map_err(DomainError::internal)?
        {
            debug!(email = %profile.email, "registration rejected: email taken");
            return Err(DomainError::DuplicateEmail);
        }

        let public = PublicUser::from(&profile);
        self.users
            .insert(profile)
            .await
            .map_err(DomainError::internal)?;

        info!(email = %public.email, "user registered");
        Ok(public)
    }

    /// Verifies an email/password pair against the stored profile.
    ///
    /// Unknown email and wrong password collapse into the same error so the
    /// response does not leak which emails are registered.
    pub async fn login(&self, email: &str, password: &str) -> Result<PublicUser> {
        let profile = self
            .users
            .find(email)
            .await
            .map_err(DomainError::internal)?
            .ok_or(DomainError::InvalidCredentials)?;

        if profile.password != password {
            debug!(email = %email, "login rejected: wrong password");
            return Err(DomainError::InvalidCredentials);
        }

        info!(email = %email, "user logged in");
        Ok(PublicUser::from(&profile))
    }
}
