//! Task-level generation: summaries, tag suggestions and the weekly briefing.
//!
//! Same contract as handbook synthesis: validate first, require a credential,
//! then exactly one call to the text generator.

pub mod handlers;
pub mod prompts;

use tracing::info;

use crate::errors::AppError;
use crate::handbook::synthesizer::{usable_credential, SynthesisError};
use crate::llm_client::{GenerationConfig, GenerationRequest, LlmError, TextGenerator};
use prompts::{BRIEFING_PROMPT_TEMPLATE, SUMMARY_PROMPT_TEMPLATE, TAGS_PROMPT_TEMPLATE};

pub const SUMMARY_MODEL: &str = "gemini-3-flash-preview";
pub const TAGS_MODEL: &str = "gemini-3-flash-preview";
pub const BRIEFING_MODEL: &str = "gemini-3-pro-preview";

const SUMMARY_TEMPERATURE: f32 = 0.3;
const TAGS_TEMPERATURE: f32 = 0.4;
const BRIEFING_TEMPERATURE: f32 = 1.0;
const BRIEFING_THINKING_BUDGET: u32 = 4000;

pub const NO_SUMMARY: &str = "No summary available.";
pub const NO_BRIEFING: &str = "Briefing failed to generate.";

/// Condenses one task into 3-5 bullet points.
pub fn summarize_task(
    content: &str,
    credential: Option<&str>,
    generator: &dyn TextGenerator,
) -> Result<String, AppError> {
    require_text(content, "content")?;
    let prompt = SUMMARY_PROMPT_TEMPLATE.replace("{content}", content);
    let summary = call(
        credential,
        generator,
        SUMMARY_MODEL,
        &prompt,
        GenerationConfig::with_temperature(SUMMARY_TEMPERATURE),
    )?;
    Ok(summary.unwrap_or_else(|| NO_SUMMARY.to_string()))
}

/// Suggests categorization tags for one task.
pub fn suggest_tags(
    content: &str,
    credential: Option<&str>,
    generator: &dyn TextGenerator,
) -> Result<Vec<String>, AppError> {
    require_text(content, "content")?;
    let prompt = TAGS_PROMPT_TEMPLATE.replace("{content}", content);
    let reply = call(
        credential,
        generator,
        TAGS_MODEL,
        &prompt,
        GenerationConfig::with_temperature(TAGS_TEMPERATURE),
    )?;
    Ok(reply.as_deref().map(parse_tags).unwrap_or_default())
}

/// Weekly CEO briefing over a set of task summaries.
pub fn daily_briefing(
    tasks: &[String],
    credential: Option<&str>,
    generator: &dyn TextGenerator,
) -> Result<String, AppError> {
    let tasks: Vec<&str> = tasks
        .iter()
        .map(String::as_str)
        .filter(|t| !t.trim().is_empty())
        .collect();
    if tasks.is_empty() {
        return Err(AppError::Validation("tasks cannot be empty".to_string()));
    }

    let prompt = BRIEFING_PROMPT_TEMPLATE.replace("{tasks}", &tasks.join("\n"));
    let config = GenerationConfig {
        temperature: Some(BRIEFING_TEMPERATURE),
        thinking_budget: Some(BRIEFING_THINKING_BUDGET),
        ..GenerationConfig::default()
    };
    let briefing = call(credential, generator, BRIEFING_MODEL, &prompt, config)?;
    Ok(briefing.unwrap_or_else(|| NO_BRIEFING.to_string()))
}

/// Splits a comma-separated reply into trimmed, non-empty tags.
pub fn parse_tags(reply: &str) -> Vec<String> {
    reply
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

fn require_text(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// One generator call. An empty reply is `Ok(None)` so callers can pick a fallback.
fn call(
    credential: Option<&str>,
    generator: &dyn TextGenerator,
    model: &str,
    prompt: &str,
    config: GenerationConfig,
) -> Result<Option<String>, AppError> {
    let api_key = usable_credential(credential).ok_or(SynthesisError::MissingCredential)?;
    let request = GenerationRequest {
        model,
        prompt,
        config,
    };

    info!("Task generation via {model}");

    match generator.generate(api_key, &request) {
        Ok(text) if text.trim().is_empty() => Ok(None),
        Ok(text) => Ok(Some(text)),
        Err(LlmError::EmptyContent) => Ok(None),
        Err(e) => Err(AppError::Llm(e.reason())),
    }
}
