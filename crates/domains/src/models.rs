//! # Domain Models
//!
//! These structs represent the core entities of Fishlog. Wire names follow
//! the mobile client's camelCase convention, so every serialized field is
//! renamed explicitly rather than relying on the Rust field names.

use serde::{Deserialize, Serialize};

/// A registered account, exactly as submitted at registration.
///
/// The password is kept verbatim in memory for the lifetime of the process.
/// This is a demo store: no hashing, no update/delete lifecycle, nothing
/// survives a restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub phone: String,
    /// Unique key in the user store.
    pub email: String,
    pub password: String,
}

/// The profile fields safe to echo back to clients (profile minus password).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl From<&UserProfile> for PublicUser {
    fn from(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            phone: profile.phone.clone(),
            email: profile.email.clone(),
        }
    }
}

/// A logged fishing catch, as stored and listed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capture {
    /// Timestamp-derived identifier assigned at append time.
    /// Not guaranteed unique under concurrent appends.
    pub id: String,
    pub species: String,
    pub weight_kg: f64,
    pub size_cm: Option<u32>,
    pub city: String,
    pub zone: String,
    /// Calendar date as submitted, e.g. "2026-02-09".
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    /// Clock time as submitted, e.g. "11:39 PM".
    pub time_str: String,
    pub photo_uri: Option<String>,
}

/// A catch submission before an identifier has been assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCapture {
    pub species: String,
    pub weight_kg: f64,
    pub size_cm: Option<u32>,
    pub city: String,
    pub zone: String,
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    pub time_str: String,
    pub photo_uri: Option<String>,
}

impl NewCapture {
    /// Promotes a submission to a stored capture with the given identifier.
    pub fn into_capture(self, id: String) -> Capture {
        Capture {
            id,
            species: self.species,
            weight_kg: self.weight_kg,
            size_cm: self.size_cm,
            city: self.city,
            zone: self.zone,
            date_iso: self.date_iso,
            time_str: self.time_str,
            photo_uri: self.photo_uri,
        }
    }
}

/// The result of a species detection run against an uploaded photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub species: String,
    pub size_cm: u32,
    pub weight_g: u32,
    /// Whether the detected size clears the regulatory minimum.
    pub legal: bool,
    /// Human-readable regulation text for the detected species.
    pub rule: String,
    pub confidence: f64,
}
