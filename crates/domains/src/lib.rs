//! fishlog/crates/domains/src/lib.rs
//!
//! The central domain models and port definitions for Fishlog.

pub mod error;
pub mod models;
pub mod ports;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use ports::*;

#[cfg(test)]
mod tests {
    use super::models::*;

    #[test]
    fn capture_wire_names_are_camel_case() {
        let capture = Capture {
            id: "1757421234567".to_string(),
            species: "Dorade royale".to_string(),
            weight_kg: 1.4,
            size_cm: Some(38),
            city: "Agadir".to_string(),
            zone: "Zone 3".to_string(),
            date_iso: "2026-02-09".to_string(),
            time_str: "11:39 PM".to_string(),
            photo_uri: None,
        };
        let json = serde_json::to_value(&capture).unwrap();
        assert_eq!(json["weightKg"], 1.4);
        assert_eq!(json["sizeCm"], 38);
        assert_eq!(json["dateISO"], "2026-02-09");
        assert_eq!(json["timeStr"], "11:39 PM");
        assert!(json["photoUri"].is_null());
    }

    #[test]
    fn public_user_drops_the_password() {
        let profile = UserProfile {
            name: "Yassine".to_string(),
            phone: "0600000000".to_string(),
            email: "yassine@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let public = PublicUser::from(&profile);
        let json = serde_json::to_value(&public).unwrap();
        assert_eq!(json["email"], "yassine@example.com");
        assert!(json.get("password").is_none());
    }
}
