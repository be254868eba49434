//! Axum route handlers for the task generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::tasks::{daily_briefing, suggest_tags, summarize_task};

#[derive(Debug, Deserialize)]
pub struct TaskContentRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct BriefingRequest {
    pub tasks: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BriefingResponse {
    pub briefing: String,
}

/// POST /api/v1/tasks/summarize
pub async fn handle_summarize(
    State(state): State<AppState>,
    Json(request): Json<TaskContentRequest>,
) -> Result<Json<SummaryResponse>, AppError> {
    let summary = state
        .with_generator(move |credential, generator| {
            summarize_task(&request.content, credential, generator)
        })
        .await?;
    Ok(Json(SummaryResponse { summary }))
}

/// POST /api/v1/tasks/tags
pub async fn handle_tags(
    State(state): State<AppState>,
    Json(request): Json<TaskContentRequest>,
) -> Result<Json<TagsResponse>, AppError> {
    let tags = state
        .with_generator(move |credential, generator| {
            suggest_tags(&request.content, credential, generator)
        })
        .await?;
    Ok(Json(TagsResponse { tags }))
}

/// POST /api/v1/tasks/briefing
pub async fn handle_briefing(
    State(state): State<AppState>,
    Json(request): Json<BriefingRequest>,
) -> Result<Json<BriefingResponse>, AppError> {
    let briefing = state
        .with_generator(move |credential, generator| {
            daily_briefing(&request.tasks, credential, generator)
        })
        .await?;
    Ok(Json(BriefingResponse { briefing }))
}
