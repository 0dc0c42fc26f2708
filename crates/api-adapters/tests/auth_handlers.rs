//! Handler-level tests for the auth routes, driven through the router
//! with `tower::ServiceExt::oneshot`.

use api_adapters::{router, AppState};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    router(AppState::in_memory())
}

async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn register_body() -> Value {
    json!({
        "name": "Yassine",
        "phone": "0611223344",
        "email": "yassine@example.com",
        "password": "secret"
    })
}

#[tokio::test]
async fn register_returns_token_and_user_without_password() {
    let app = app();
    let (status, body) = post_json(&app, "/auth/register", register_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["token"], "demo-token");
    assert_eq!(body["user"]["name"], "Yassine");
    assert_eq!(body["user"]["phone"], "0611223344");
    assert_eq!(body["user"]["email"], "yassine@example.com");
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn duplicate_registration_is_ok_false_with_http_200() {
    let app = app();
    let (_, first) = post_json(&app, "/auth/register", register_body()).await;
    assert_eq!(first["ok"], true);

    let (status, second) = post_json(&app, "/auth/register", register_body()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["ok"], false);
    assert_eq!(second["message"], "Email déjà utilisé");
}

#[tokio::test]
async fn login_round_trip_after_registration() {
    let app = app();
    post_json(&app, "/auth/register", register_body()).await;

    let (status, body) = post_json(
        &app,
        "/auth/login",
        json!({ "email": "yassine@example.com", "password": "secret" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["token"], "demo-token");
    assert_eq!(body["user"]["phone"], "0611223344");
}

#[tokio::test]
async fn login_failures_share_one_message() {
    let app = app();
    post_json(&app, "/auth/register", register_body()).await;

    let (status, wrong_pw) = post_json(
        &app,
        "/auth/login",
        json!({ "email": "yassine@example.com", "password": "nope" }),
    )
    .await;
    let (_, unknown) = post_json(
        &app,
        "/auth/login",
        json!({ "email": "ghost@example.com", "password": "secret" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(wrong_pw["ok"], false);
    assert_eq!(wrong_pw["message"], "Email ou mot de passe incorrect");
    assert_eq!(unknown["message"], wrong_pw["message"]);
}
