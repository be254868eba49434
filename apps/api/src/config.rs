use anyhow::{Context, Result};

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Application configuration loaded from environment variables.
/// Nothing here is required: a missing `API_KEY` only disables synthesis.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the text-generation service. `None` when unset or empty.
    pub api_key: Option<String>,
    pub gemini_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_key: optional_env("API_KEY"),
            gemini_base_url: optional_env("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn synthesis_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

fn optional_env(key: &str) -> Option<String> {
    non_empty(std::env::var(key).ok())
}

/// Treats a blank value the same as an unset one.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_credential_counts_as_absent() {
        assert_eq!(non_empty(Some("   ".to_string())), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_present_credential_is_kept_verbatim() {
        assert_eq!(non_empty(Some("k-123".to_string())), Some("k-123".to_string()));
    }

    #[test]
    fn test_synthesis_enabled_follows_api_key() {
        let mut config = Config {
            api_key: None,
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        };
        assert!(!config.synthesis_enabled());
        config.api_key = Some("key".to_string());
        assert!(config.synthesis_enabled());
    }
}
