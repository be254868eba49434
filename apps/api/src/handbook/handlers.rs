//! Axum route handlers for stateless handbook synthesis.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::handbook::profile::{handbook_filename, HandbookForm, HANDBOOK_MIME};
use crate::handbook::synthesizer::synthesize;
use crate::llm_client::HANDBOOK_MODEL;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HandbookResponse {
    pub filename: String,
    pub mime: &'static str,
    pub model: &'static str,
    pub markdown: String,
}

/// POST /api/v1/handbook
///
/// Validates the form, synthesizes the handbook and returns it with its
/// download filename.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(form): Json<HandbookForm>,
) -> Result<Json<HandbookResponse>, AppError> {
    let (filename, markdown) = generate(&state, form).await?;
    Ok(Json(HandbookResponse {
        filename,
        mime: HANDBOOK_MIME,
        model: HANDBOOK_MODEL,
        markdown,
    }))
}

/// POST /api/v1/handbook/download
///
/// Same as `handle_generate` but answers with the Markdown file itself.
pub async fn handle_download(
    State(state): State<AppState>,
    Json(form): Json<HandbookForm>,
) -> Result<Response, AppError> {
    let (filename, markdown) = generate(&state, form).await?;
    Ok(markdown_download(&filename, markdown))
}

async fn generate(state: &AppState, form: HandbookForm) -> Result<(String, String), AppError> {
    // identity is checked here, before any blocking work is scheduled
    let profile = form.into_profile()?;
    let filename = handbook_filename(profile.name());

    let markdown = state
        .with_generator(move |credential, generator| {
            Ok(synthesize(&profile, credential, generator)?)
        })
        .await?;

    Ok((filename, markdown))
}

/// Builds an attachment response for a handbook.
pub fn markdown_download(filename: &str, markdown: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, format!("{HANDBOOK_MIME}; charset=utf-8")),
            (header::CONTENT_DISPOSITION, content_disposition(filename)),
        ],
        markdown,
    )
        .into_response()
}

/// `attachment` disposition with an ASCII fallback name and an RFC 5987
/// `filename*` carrying the exact UTF-8 name.
fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii() && !c.is_ascii_control() => c,
            _ => '_',
        })
        .collect();

    if fallback == filename {
        return format!("attachment; filename=\"{filename}\"");
    }

    let encoded: String = filename
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'.' | b'_' | b'-' => (b as char).to_string(),
            _ => format!("%{b:02X}"),
        })
        .collect();
    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}
