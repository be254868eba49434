//! FTE profile: the validated identity and stack a handbook is generated for.

use serde::{Deserialize, Serialize};

use crate::handbook::synthesizer::SynthesisError;

/// Label used when no stack tag is selected.
pub const DEFAULT_STACK_LABEL: &str = "Standard AI Stack";

/// MIME type of the downloadable handbook.
pub const HANDBOOK_MIME: &str = "text/markdown";

/// Optional capability labels a handbook can be tailored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackTag {
    #[serde(rename = "Spec Kit")]
    SpecKit,
    #[serde(rename = "Claude Code")]
    ClaudeCode,
    #[serde(rename = "Qwen")]
    Qwen,
}

impl StackTag {
    pub fn label(self) -> &'static str {
        match self {
            StackTag::SpecKit => "Spec Kit",
            StackTag::ClaudeCode => "Claude Code",
            StackTag::Qwen => "Qwen",
        }
    }

    /// The clarifying instruction added to the prompt when this tag is selected.
    pub fn directive(self) -> &'static str {
        match self {
            StackTag::SpecKit => "define documentation using standard specification templates",
            StackTag::ClaudeCode => {
                "define CLI-based interaction logic for coding tasks and terminal environments"
            }
            StackTag::Qwen => "specify reasoning tasks for high-throughput LLMs",
        }
    }
}

/// Raw form submission, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HandbookForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub focus: String,
    #[serde(default)]
    pub stack: Vec<StackTag>,
    /// Summaries of existing operational work to fold into the handbook.
    #[serde(default)]
    pub task_contexts: Vec<String>,
}

impl HandbookForm {
    pub fn into_profile(self) -> Result<FteProfile, SynthesisError> {
        FteProfile::new(self.name, self.focus, self.stack, self.task_contexts)
    }
}

/// A validated profile. `name` and `focus` are guaranteed non-blank.
#[derive(Debug, Clone, PartialEq)]
pub struct FteProfile {
    name: String,
    focus: String,
    stack: Vec<StackTag>,
    task_contexts: Vec<String>,
}

impl FteProfile {
    pub fn new(
        name: String,
        focus: String,
        stack: Vec<StackTag>,
        task_contexts: Vec<String>,
    ) -> Result<Self, SynthesisError> {
        if name.trim().is_empty() || focus.trim().is_empty() {
            return Err(SynthesisError::MissingIdentity);
        }

        let mut unique = Vec::with_capacity(stack.len());
        for tag in stack {
            if !unique.contains(&tag) {
                unique.push(tag);
            }
        }

        let task_contexts = task_contexts
            .into_iter()
            .filter(|c| !c.trim().is_empty())
            .collect();

        Ok(Self {
            name,
            focus,
            stack: unique,
            task_contexts,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn focus(&self) -> &str {
        &self.focus
    }

    pub fn stack(&self) -> &[StackTag] {
        &self.stack
    }

    pub fn task_contexts(&self) -> &[String] {
        &self.task_contexts
    }
}

/// Comma-joined tag labels, or the default label when nothing is selected.
pub fn stack_description(stack: &[StackTag]) -> String {
    if stack.is_empty() {
        return DEFAULT_STACK_LABEL.to_string();
    }
    stack
        .iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Download filename for a handbook: `Handbook_<name with spaces as underscores>.md`.
pub fn handbook_filename(name: &str) -> String {
    format!("Handbook_{}.md", name.replace(' ', "_"))
}
