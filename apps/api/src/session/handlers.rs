//! Axum route handlers for session-scoped handbook synthesis.
//!
//! Submission errors are reported inline in the returned view; only an unknown
//! session is an HTTP error.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::handbook::handlers::markdown_download;
use crate::handbook::profile::HandbookForm;
use crate::session::{render, submit, Session, View};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    pub view: View,
}

/// POST /api/v1/sessions
pub async fn handle_create(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreateSessionResponse>) {
    let (session_id, session) = state.sessions.create().await;
    info!("Session {session_id} created");
    (
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            session_id,
            view: render(&session, None),
        }),
    )
}

/// GET /api/v1/sessions/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<View>, AppError> {
    let session = load(&state, id).await?;
    Ok(Json(render(&session, None)))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// POST /api/v1/sessions/:id/handbook
pub async fn handle_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<HandbookForm>,
) -> Result<Json<View>, AppError> {
    let session = load(&state, id).await?;

    let (session, notice) = state
        .with_generator(move |credential, generator| {
            Ok(submit(session, form, credential, generator))
        })
        .await?;

    let view = render(&session, Some(notice));
    if !state.sessions.put(id, session).await {
        return Err(not_found(id));
    }
    Ok(Json(view))
}

/// GET /api/v1/sessions/:id/handbook/download
pub async fn handle_download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let session = load(&state, id).await?;
    let handbook = session
        .handbook()
        .ok_or_else(|| AppError::NotFound("No handbook generated in this session yet".into()))?;
    Ok(markdown_download(&handbook.filename(), handbook.markdown.clone()))
}

async fn load(state: &AppState, id: Uuid) -> Result<Session, AppError> {
    state.sessions.get(id).await.ok_or_else(|| not_found(id))
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}
