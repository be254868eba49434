//! Handbook Synthesizer — turns a validated profile into handbook Markdown.
//!
//! One call to the text generator per invocation, no retries, no caching.
//! The returned text is passed through untouched.

use thiserror::Error;
use tracing::{info, warn};

use crate::handbook::prompts::build_handbook_prompt;
use crate::handbook::profile::FteProfile;
use crate::llm_client::{GenerationConfig, GenerationRequest, TextGenerator, HANDBOOK_MODEL};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    #[error("Missing Identity Context. Please define the FTE Alias and Focus.")]
    MissingIdentity,

    #[error("API_KEY environment variable not found.")]
    MissingCredential,

    #[error("Synthesis failed: {0}")]
    SynthesisFailure(String),
}

/// A credential counts only when it is present and not blank.
pub fn usable_credential(credential: Option<&str>) -> Option<&str> {
    credential.filter(|k| !k.trim().is_empty())
}

/// Generates the handbook for `profile`.
///
/// A missing or blank credential short-circuits before any network call.
pub fn synthesize(
    profile: &FteProfile,
    credential: Option<&str>,
    generator: &dyn TextGenerator,
) -> Result<String, SynthesisError> {
    let api_key = usable_credential(credential).ok_or(SynthesisError::MissingCredential)?;

    let prompt = build_handbook_prompt(profile);
    let request = GenerationRequest {
        model: HANDBOOK_MODEL,
        prompt: &prompt,
        config: GenerationConfig::default(),
    };

    info!("Synthesizing handbook for {:?} via {}", profile.name(), HANDBOOK_MODEL);

    match generator.generate(api_key, &request) {
        Ok(text) => {
            info!("Handbook synthesized: {} bytes", text.len());
            Ok(text)
        }
        Err(e) => {
            warn!("Handbook synthesis failed: {e}");
            Err(SynthesisError::SynthesisFailure(e.reason()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handbook::profile::{HandbookForm, StackTag};
    use crate::llm_client::testing::StubGenerator;
    use crate::llm_client::GeminiClient;
    use httpmock::Method::POST;
    use httpmock::MockServer;
    use serde_json::json;

    fn acme() -> FteProfile {
        FteProfile::new(
            "Acme Corp".into(),
            "Client invoicing".into(),
            vec![StackTag::SpecKit],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn test_success_returns_text_verbatim() {
        let stub = StubGenerator::replying("# Mission\n...");
        let text = synthesize(&acme(), Some("key"), &stub).unwrap();
        assert_eq!(text, "# Mission\n...");
        assert_eq!(stub.calls(), 1);
    }

    #[test]
    fn test_whitespace_in_output_is_preserved() {
        let raw = "\n\n  # Mission  \n<b>raw</b>\n\n";
        let stub = StubGenerator::replying(raw);
        assert_eq!(synthesize(&acme(), Some("key"), &stub).unwrap(), raw);
    }

    #[test]
    fn test_error_message_is_carried_through() {
        let stub = StubGenerator::failing("rate limited");
        let err = synthesize(&acme(), Some("key"), &stub).unwrap_err();
        assert_eq!(err, SynthesisError::SynthesisFailure("rate limited".into()));
        assert_eq!(err.to_string(), "Synthesis failed: rate limited");
        assert_eq!(stub.calls(), 1);
    }

    #[test]
    fn test_absent_credential_makes_no_call() {
        let stub = StubGenerator::replying("unused");
        assert_eq!(
            synthesize(&acme(), None, &stub),
            Err(SynthesisError::MissingCredential)
        );
        assert_eq!(
            synthesize(&acme(), Some(""), &stub),
            Err(SynthesisError::MissingCredential)
        );
        assert_eq!(stub.calls(), 0);
    }

    #[test]
    fn test_missing_identity_never_reaches_generator() {
        let stub = StubGenerator::replying("unused");
        for (name, focus) in [("", "focus"), ("name", ""), ("", "")] {
            let form = HandbookForm {
                name: name.into(),
                focus: focus.into(),
                ..HandbookForm::default()
            };
            let outcome = form
                .into_profile()
                .and_then(|p| synthesize(&p, Some("key"), &stub));
            assert_eq!(outcome, Err(SynthesisError::MissingIdentity));
        }
        assert_eq!(stub.calls(), 0);
    }

    #[test]
    fn test_call_uses_flash_model_key_and_prompt() {
        let stub = StubGenerator::replying("ok");
        let profile = acme();
        synthesize(&profile, Some("secret"), &stub).unwrap();

        let (key, model, prompt) = stub.last_call().unwrap();
        assert_eq!(key, "secret");
        assert_eq!(model, "gemini-1.5-flash-latest");
        assert_eq!(prompt, build_handbook_prompt(&profile));
    }

    #[test]
    fn test_gemini_rate_limit_becomes_failure() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1beta/models/gemini-1.5-flash-latest:generateContent")
                .header("x-goog-api-key", "key");
            then.status(429).json_body(json!({
                "error": {"code": 429, "message": "rate limited", "status": "RESOURCE_EXHAUSTED"}
            }));
        });

        let client = GeminiClient::new(server.base_url()).unwrap();
        let err = synthesize(&acme(), Some("key"), &client).unwrap_err();

        mock.assert();
        assert_eq!(err, SynthesisError::SynthesisFailure("rate limited".into()));
    }

    #[test]
    fn test_gemini_success_is_returned_verbatim() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST);
            then.status(200).json_body(json!({
                "candidates": [{"content": {"parts": [{"text": "# Mission\n..."}]}}]
            }));
        });

        let client = GeminiClient::new(server.base_url()).unwrap();
        let text = synthesize(&acme(), Some("key"), &client).unwrap();

        mock.assert_hits(1);
        assert_eq!(text, "# Mission\n...");
    }

    #[test]
    fn test_unreachable_service_becomes_failure() {
        // nothing listens on the discard port
        let client = GeminiClient::new("http://127.0.0.1:9").unwrap();
        match synthesize(&acme(), Some("key"), &client) {
            Err(SynthesisError::SynthesisFailure(reason)) => {
                assert!(reason.starts_with("HTTP error:"), "unexpected reason: {reason}");
            }
            other => panic!("expected SynthesisFailure, got {other:?}"),
        }
    }
}
