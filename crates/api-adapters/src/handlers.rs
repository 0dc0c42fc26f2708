//! # API Handlers
//!
//! This module coordinates the flow between HTTP requests and the services.
//! Duplicate registrations and bad logins come back as HTTP 200 with
//! `ok: false`; malformed bodies get axum's default rejections.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use domains::DomainError;
use mime::Mime;
use tracing::warn;

use crate::dto::{AuthGranted, CaptureList, CaptureStored, LoginBody, Rejected, RegisterBody};
use crate::state::AppState;

/// POST /ai/detect — runs the detector against the uploaded photo.
///
/// The first multipart field is taken as the image; the demo client always
/// sends exactly one field named `file`. A missing field still produces a
/// report, since the stub ignores the image anyway.
pub async fn detect(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut image = Bytes::new();
    let mut content_type: Option<Mime> = None;

    match multipart.next_field().await {
        Ok(Some(field)) => {
            content_type = field.content_type().and_then(|ct| ct.parse().ok());
            match field.bytes().await {
                Ok(bytes) => image = bytes,
                Err(err) => {
                    warn!(%err, "failed to read multipart upload");
                    return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
                }
            }
        }
        Ok(None) => {}
        Err(err) => {
            warn!(%err, "malformed multipart request");
            return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
        }
    }

    match state.detection.detect(image, content_type).await {
        Ok(report) => Json(report).into_response(),
        Err(err) => failure(err),
    }
}

/// POST /auth/register — stores a new profile and issues the demo token.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Response {
    match state.auth.register(body.into_profile()).await {
        Ok(user) => Json(AuthGranted::new(user)).into_response(),
        Err(err) => failure(err),
    }
}

/// POST /auth/login — verifies credentials and issues the demo token.
pub async fn login(State(state): State<AppState>, Json(body): Json<LoginBody>) -> Response {
    match state.auth.login(&body.email, &body.password).await {
        Ok(user) => Json(AuthGranted::new(user)).into_response(),
        Err(err) => failure(err),
    }
}

/// POST /logbook/add — assigns an id and prepends the capture.
pub async fn add_capture(
    State(state): State<AppState>,
    Json(body): Json<domains::NewCapture>,
) -> Response {
    match state.logbook.add(body).await {
        Ok(capture) => Json(CaptureStored::new(capture)).into_response(),
        Err(err) => failure(err),
    }
}

/// GET /logbook/list — the whole log, newest first, no pagination.
pub async fn list_captures(State(state): State<AppState>) -> Response {
    match state.logbook.list().await {
        Ok(items) => Json(CaptureList::new(items)).into_response(),
        Err(err) => failure(err),
    }
}

/// Maps a service error to the wire: domain failures stay HTTP 200 with
/// `ok: false`, infrastructure faults become a 500.
fn failure(err: DomainError) -> Response {
    let status = match err {
        DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    };
    (status, Json(Rejected::new(err.to_string()))).into_response()
}
