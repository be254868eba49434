// Prompt templates for task-level generation (summaries, tags, briefings).
// Each template has a single placeholder, filled with user text last.

/// Replace `{content}` before sending.
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Analyze the following task content and extract 3-5 key points or critical actions.
Keep the summary extremely concise, focused on operational logic, and high-value insights.

Task Content:
{content}

Return the summary in bullet points."#;

/// Replace `{content}` before sending.
pub const TAGS_PROMPT_TEMPLATE: &str = r#"Analyze the following Digital FTE task content and suggest 3-5 professional, concise tags/labels that help categorize this work (e.g., "Operations", "Client-Facing", "High-Risk"). Return only a comma-separated list of tags.

Content:
{content}"#;

/// Replace `{tasks}` before sending.
pub const BRIEFING_PROMPT_TEMPLATE: &str = r#"Act as a Digital FTE performing a "Monday Morning CEO Briefing".
Audit the following weekly task summaries and provide a high-level briefing for the CEO.

Tasks:
{tasks}

Provide:
1. Executive Summary
2. Revenue & Metrics
3. Bottlenecks Identified
4. Proactive Suggestions (e.g., cost savings, tool optimizations)

Format in professional Markdown with a focus on business value."#;
