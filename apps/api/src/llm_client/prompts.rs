// Shared prompt fragments. Each feature that calls the LLM keeps its own
// prompts.rs alongside it; only cross-cutting pieces live here.

/// Persona every generation prompt opens with.
pub const ARCHITECT_PERSONA: &str = "Act as a senior AI Architect.";

/// Closing instruction for prompts whose output is a Markdown document.
pub const MARKDOWN_FORMAT_INSTRUCTION: &str =
    "Format the response in clean, professional Markdown.";
