//! UI session: the last generated handbook plus the event log shown beside it.
//!
//! A `Session` is a plain value owned by the caller. `submit` consumes one and
//! hands back the next; `render` turns one into the view the front end draws.
//! Nothing in here is global.

pub mod handlers;
pub mod store;

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::handbook::profile::{handbook_filename, HandbookForm, HANDBOOK_MIME};
use crate::handbook::synthesizer::{synthesize, usable_credential};
use crate::llm_client::TextGenerator;

/// Oldest events are dropped past this many.
pub const MAX_EVENTS: usize = 50;

pub const READY_MESSAGE: &str = "Operational Asset Ready.";
pub const EMPTY_STATE_MESSAGE: &str =
    "Configure the FTE Orchestrator to generate operational assets.";

#[derive(Debug, Clone, Serialize)]
pub struct LogEvent {
    pub at: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Handbook {
    pub fte_name: String,
    pub markdown: String,
    pub generated_at: DateTime<Utc>,
}

impl Handbook {
    pub fn filename(&self) -> String {
        handbook_filename(&self.fte_name)
    }
}

/// Inline message shown after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Notice {
    Success(String),
    Error(String),
}

#[derive(Debug, Clone)]
pub struct Session {
    handbook: Option<Handbook>,
    events: VecDeque<LogEvent>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let mut session = Self {
            handbook: None,
            events: VecDeque::new(),
        };
        session.log("FTE_ARCHITECT initialized.");
        session
    }

    pub fn handbook(&self) -> Option<&Handbook> {
        self.handbook.as_ref()
    }

    pub fn events(&self) -> impl Iterator<Item = &LogEvent> {
        self.events.iter()
    }

    fn log(&mut self, message: &str) {
        if self.events.len() == MAX_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(LogEvent {
            at: Utc::now(),
            message: message.to_string(),
        });
    }
}

/// Handles one form submission.
///
/// Any failure leaves the previous handbook in place; only a successful
/// synthesis replaces it.
pub fn submit(
    mut session: Session,
    form: HandbookForm,
    credential: Option<&str>,
    generator: &dyn TextGenerator,
) -> (Session, Notice) {
    session.log("Synthesis event triggered.");

    let profile = match form.into_profile() {
        Ok(profile) => profile,
        Err(e) => return (session, Notice::Error(e.to_string())),
    };

    if usable_credential(credential).is_some() {
        session.log("Prompt sent to Gemini Flash.");
    }

    match synthesize(&profile, credential, generator) {
        Ok(markdown) => {
            session.handbook = Some(Handbook {
                fte_name: profile.name().to_string(),
                markdown,
                generated_at: Utc::now(),
            });
            session.log("Operational asset ready.");
            (session, Notice::Success(READY_MESSAGE.to_string()))
        }
        Err(e) => {
            session.log("Synthesis failed.");
            (session, Notice::Error(e.to_string()))
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    pub fte_name: String,
    pub filename: String,
    pub mime: &'static str,
    pub markdown: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct View {
    pub notice: Option<Notice>,
    pub preview: Option<Preview>,
    /// Shown in place of the preview until a handbook exists.
    pub placeholder: Option<&'static str>,
    pub events: Vec<LogEvent>,
}

pub fn render(session: &Session, notice: Option<Notice>) -> View {
    let preview = session.handbook().map(|h| Preview {
        fte_name: h.fte_name.clone(),
        filename: h.filename(),
        mime: HANDBOOK_MIME,
        markdown: h.markdown.clone(),
        generated_at: h.generated_at,
    });
    let placeholder = preview.is_none().then_some(EMPTY_STATE_MESSAGE);

    View {
        notice,
        preview,
        placeholder,
        events: session.events().cloned().collect(),
    }
}
