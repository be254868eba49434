use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Production: `GeminiClient`. Tests swap in a stub.
    pub generator: Arc<dyn TextGenerator>,
    pub sessions: SessionStore,
}

impl AppState {
    /// Runs `f` on the blocking pool with the configured credential and generator.
    /// Generation is synchronous and must never run on a runtime worker.
    pub async fn with_generator<T, F>(&self, f: F) -> Result<T, AppError>
    where
        T: Send + 'static,
        F: FnOnce(Option<&str>, &dyn TextGenerator) -> Result<T, AppError> + Send + 'static,
    {
        let credential = self.config.api_key.clone();
        let generator = Arc::clone(&self.generator);

        tokio::task::spawn_blocking(move || f(credential.as_deref(), generator.as_ref()))
            .await
            .map_err(|e| AppError::Internal(e.into()))?
    }
}
