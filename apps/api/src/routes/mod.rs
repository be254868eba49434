pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handbook::handlers as handbook;
use crate::session::handlers as session;
use crate::state::AppState;
use crate::tasks::handlers as tasks;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless handbook API
        .route("/api/v1/handbook", post(handbook::handle_generate))
        .route("/api/v1/handbook/download", post(handbook::handle_download))
        // Session API
        .route("/api/v1/sessions", post(session::handle_create))
        .route(
            "/api/v1/sessions/:id",
            get(session::handle_get).delete(session::handle_delete),
        )
        .route("/api/v1/sessions/:id/handbook", post(session::handle_submit))
        .route(
            "/api/v1/sessions/:id/handbook/download",
            get(session::handle_download),
        )
        // Task generation API
        .route("/api/v1/tasks/summarize", post(tasks::handle_summarize))
        .route("/api/v1/tasks/tags", post(tasks::handle_tags))
        .route("/api/v1/tasks/briefing", post(tasks::handle_briefing))
        .with_state(state)
}
