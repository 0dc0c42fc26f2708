//! Black-box tests for the logbook routes.

use axum::http::StatusCode;
use integration_tests::{send_json, test_app};
use serde_json::{json, Value};

fn capture_body(species: &str) -> Value {
    json!({
        "species": species,
        "weightKg": 1.2,
        "sizeCm": 35,
        "city": "Essaouira",
        "zone": "Zone 1",
        "dateISO": "2026-02-09",
        "timeStr": "11:39 PM",
        "photoUri": null
    })
}

#[tokio::test]
async fn list_is_empty_before_any_append() {
    let app = test_app();
    let (status, body) = send_json(&app, "GET", "/logbook/list", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn add_echoes_the_stored_capture_with_an_id() {
    let app = test_app();
    let (status, body) =
        send_json(&app, "POST", "/logbook/add", Some(capture_body("Dorade"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["capture"]["species"], "Dorade");
    assert_eq!(body["capture"]["weightKg"], 1.2);
    assert_eq!(body["capture"]["dateISO"], "2026-02-09");
    assert_eq!(body["capture"]["timeStr"], "11:39 PM");

    let id = body["capture"]["id"].as_str().unwrap();
    assert!(!id.is_empty());
    id.parse::<i64>().expect("id is a millisecond timestamp");
}

#[tokio::test]
async fn listing_returns_appends_newest_first() {
    let app = test_app();
    for species in ["Sardine", "Pageot", "Dorade"] {
        let (_, body) =
            send_json(&app, "POST", "/logbook/add", Some(capture_body(species))).await;
        assert_eq!(body["ok"], true);
    }

    let (_, body) = send_json(&app, "GET", "/logbook/list", None).await;
    let items = body["items"].as_array().unwrap();

    assert_eq!(items.len(), 3);
    let species: Vec<_> = items.iter().map(|c| c["species"].as_str().unwrap()).collect();
    assert_eq!(species, ["Dorade", "Pageot", "Sardine"]);
    for item in items {
        assert!(!item["id"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn optional_fields_may_be_omitted() {
    let app = test_app();
    let (status, body) = send_json(
        &app,
        "POST",
        "/logbook/add",
        Some(json!({
            "species": "Maquereau",
            "weightKg": 0.4,
            "city": "Safi",
            "zone": "Zone 2",
            "dateISO": "2026-03-01",
            "timeStr": "06:15 AM"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert!(body["capture"]["sizeCm"].is_null());
    assert!(body["capture"]["photoUri"].is_null());
}
