//! Wire DTOs for the Fishlog HTTP API.
//!
//! Domain-level failures travel inside an HTTP-200 envelope with
//! `ok: false` and a message, matching what the mobile client expects;
//! only infrastructure faults surface as HTTP error statuses.

use domains::{Capture, PublicUser, UserProfile};
use serde::{Deserialize, Serialize};

/// POST /auth/register request body.
#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

impl RegisterBody {
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            name: self.name,
            phone: self.phone,
            email: self.email,
            password: self.password,
        }
    }
}

/// POST /auth/login request body.
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

/// Successful register/login envelope.
#[derive(Debug, Serialize)]
pub struct AuthGranted {
    pub ok: bool,
    pub token: String,
    pub user: PublicUser,
}

impl AuthGranted {
    pub fn new(user: PublicUser) -> Self {
        Self {
            ok: true,
            token: services::DEMO_TOKEN.to_string(),
            user,
        }
    }
}

/// Application-level failure envelope (`ok: false` plus a message).
#[derive(Debug, Serialize, Deserialize)]
pub struct Rejected {
    pub ok: bool,
    pub message: String,
}

impl Rejected {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// POST /logbook/add response envelope.
#[derive(Debug, Serialize)]
pub struct CaptureStored {
    pub ok: bool,
    pub capture: Capture,
}

impl CaptureStored {
    pub fn new(capture: Capture) -> Self {
        Self { ok: true, capture }
    }
}

/// GET /logbook/list response envelope.
#[derive(Debug, Serialize)]
pub struct CaptureList {
    pub ok: bool,
    pub items: Vec<Capture>,
}

impl CaptureList {
    pub fn new(items: Vec<Capture>) -> Self {
        Self { ok: true, items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_granted_carries_the_demo_token() {
        let granted = AuthGranted::new(PublicUser {
            name: "Sara".into(),
            phone: "0612345678".into(),
            email: "sara@example.com".into(),
        });
        let json = serde_json::to_value(&granted).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["token"], "demo-token");
        assert_eq!(json["user"]["name"], "Sara");
    }

    #[test]
    fn rejected_envelope_shape() {
        let json = serde_json::to_value(Rejected::new("Email déjà utilisé")).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["message"], "Email déjà utilisé");
    }
}
