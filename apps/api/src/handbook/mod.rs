// Handbook synthesis: form input → profile → prompt → one LLM call → Markdown.
// All LLM calls go through llm_client; nothing here talks HTTP to the provider.

pub mod handlers;
pub mod profile;
pub mod prompts;
pub mod synthesizer;
