// Prompt construction for handbook synthesis.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::handbook::profile::{handbook_filename, stack_description, FteProfile};
use crate::llm_client::prompts::{ARCHITECT_PERSONA, MARKDOWN_FORMAT_INSTRUCTION};

/// Sections every handbook must contain, in order.
pub const HANDBOOK_SECTIONS: [&str; 5] = [
    "Mission",
    "Architecture",
    "Operational Rules",
    "Security",
    "Daily Routine",
];

/// Builds the handbook prompt. Same profile in, same string out.
///
/// Filled with a single `format!` so text typed by the user is never re-scanned
/// for placeholders.
pub fn build_handbook_prompt(profile: &FteProfile) -> String {
    format!(
        "{persona} Generate a professional '{filename}' for an AI-powered Digital FTE \
         (Full-Time Equivalent) for a company called \"{name}\".\n\
         The focus of this AI employee is: {focus}.\n\
         \n\
         The tech stack includes: {stack}.\n\
         {directives}{contexts}\n\
         Include sections for {sections}.\n\
         {format_instruction}",
        persona = ARCHITECT_PERSONA,
        filename = handbook_filename(profile.name()),
        name = profile.name(),
        focus = profile.focus(),
        stack = stack_description(profile.stack()),
        directives = stack_directives(profile),
        contexts = task_context_block(profile.task_contexts()),
        sections = section_list(),
        format_instruction = MARKDOWN_FORMAT_INSTRUCTION,
    )
}

fn stack_directives(profile: &FteProfile) -> String {
    profile
        .stack()
        .iter()
        .map(|tag| format!("- Since '{}' is selected, {}.\n", tag.label(), tag.directive()))
        .collect()
}

fn task_context_block(contexts: &[String]) -> String {
    if contexts.is_empty() {
        return String::new();
    }
    format!(
        "\nInclude insights and logic derived from these summarized operational contexts:\n{}\n",
        contexts.join("\n\n")
    )
}

/// "A, B, C, D, and E"
fn section_list() -> String {
    let [init @ .., last] = HANDBOOK_SECTIONS;
    format!("{}, and {last}", init.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handbook::profile::StackTag;

    fn profile(name: &str, stack: Vec<StackTag>, contexts: Vec<&str>) -> FteProfile {
        FteProfile::new(
            name.to_string(),
            "Answer client invoices".to_string(),
            stack,
            contexts.into_iter().map(String::from).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_prompt_names_identity_and_document() {
        let prompt = build_handbook_prompt(&profile("Acme Corp", vec![], vec![]));
        assert!(prompt.starts_with("Act as a senior AI Architect."));
        assert!(prompt.contains("'Handbook_Acme_Corp.md'"));
        assert!(prompt.contains("a company called \"Acme Corp\""));
        assert!(prompt.contains("The focus of this AI employee is: Answer client invoices."));
    }

    #[test]
    fn test_prompt_lists_all_five_sections() {
        let prompt = build_handbook_prompt(&profile("Acme", vec![], vec![]));
        assert!(prompt.contains(
            "Include sections for Mission, Architecture, Operational Rules, Security, and Daily Routine."
        ));
        assert!(prompt.ends_with("Format the response in clean, professional Markdown."));
    }

    #[test]
    fn test_no_stack_uses_default_label_and_no_directives() {
        let prompt = build_handbook_prompt(&profile("Acme", vec![], vec![]));
        assert!(prompt.contains("The tech stack includes: Standard AI Stack."));
        for tag in [StackTag::SpecKit, StackTag::ClaudeCode, StackTag::Qwen] {
            assert!(!prompt.contains(tag.directive()));
        }
    }

    #[test]
    fn test_only_selected_tags_add_directives() {
        let prompt = build_handbook_prompt(&profile(
            "Acme",
            vec![StackTag::SpecKit, StackTag::Qwen],
            vec![],
        ));
        assert!(prompt.contains("The tech stack includes: Spec Kit, Qwen."));
        assert!(prompt.contains(StackTag::SpecKit.directive()));
        assert!(prompt.contains(StackTag::Qwen.directive()));
        assert!(!prompt.contains(StackTag::ClaudeCode.directive()));

        let spec = prompt.find(StackTag::SpecKit.directive()).unwrap();
        let qwen = prompt.find(StackTag::Qwen.directive()).unwrap();
        assert!(spec < qwen);
    }

    #[test]
    fn test_task_contexts_only_appear_when_given() {
        let without = build_handbook_prompt(&profile("Acme", vec![], vec![]));
        assert!(!without.contains("operational contexts"));

        let with = build_handbook_prompt(&profile(
            "Acme",
            vec![],
            vec!["- Chase Jan invoice", "- Reply to lead"],
        ));
        assert!(with.contains("summarized operational contexts:\n- Chase Jan invoice\n\n- Reply to lead\n"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let p = profile("Acme", vec![StackTag::ClaudeCode], vec!["ctx"]);
        assert_eq!(build_handbook_prompt(&p), build_handbook_prompt(&p));
    }

    #[test]
    fn test_placeholders_in_user_text_are_not_expanded() {
        let p = FteProfile::new(
            "{stack} Inc".to_string(),
            "handle {name}".to_string(),
            vec![],
            vec![],
        )
        .unwrap();
        let prompt = build_handbook_prompt(&p);
        assert!(prompt.contains("a company called \"{stack} Inc\""));
        assert!(prompt.contains("The focus of this AI employee is: handle {name}."));
    }
}
