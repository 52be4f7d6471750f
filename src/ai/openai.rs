//! OpenAI-compatible chat-completion provider.
//!
//! This module provides the [`OpenAiProvider`], which implements
//! [`NarrativeProvider`] against any endpoint speaking the chat-completions
//! envelope: POST JSON `{model, messages, max_tokens}` with a bearer
//! credential, response JSON with `choices[0].message.content`.

use super::provider::NarrativeProvider;
use super::prompt::SYSTEM_PROMPT;
use crate::error::{ReportError, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default chat-completions endpoint.
const DEFAULT_BASE_URL: &str = "https://aiproxy.sanand.workers.dev/openai/v1/chat/completions";

/// Default model for narrative generation.
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Upper bound on the single API request, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Output-token budget for the narrative.
const DEFAULT_MAX_TOKENS: u32 = 1000;

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<Message>,
}

/// Configuration for the OpenAI-compatible provider.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// The model to use (e.g., "gpt-4o-mini").
    pub model: String,
    /// Maximum tokens in the response.
    pub max_tokens: u32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Base URL for the API (useful for proxies or custom endpoints).
    pub base_url: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl OpenAiConfig {
    /// Create a new configuration builder.
    pub fn builder() -> OpenAiConfigBuilder {
        OpenAiConfigBuilder::default()
    }
}

/// Builder for [`OpenAiConfig`].
#[derive(Default)]
pub struct OpenAiConfigBuilder {
    model: Option<String>,
    max_tokens: Option<u32>,
    timeout_secs: Option<u64>,
    base_url: Option<String>,
}

impl OpenAiConfigBuilder {
    /// Set the model to use.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the maximum tokens.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the request timeout in seconds.
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Set a custom base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> OpenAiConfig {
        OpenAiConfig {
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens: self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

/// Narrative provider backed by an OpenAI-compatible endpoint.
///
/// The credential is injected at construction; nothing here reads the
/// process environment.
///
/// # Example
///
/// ```rust,ignore
/// use csv_insight::ai::{OpenAiConfig, OpenAiProvider};
///
/// // Simple usage with defaults
/// let provider = OpenAiProvider::new(api_token)?;
///
/// // With custom configuration
/// let config = OpenAiConfig::builder()
///     .model("gpt-4o")
///     .max_tokens(2000)
///     .build();
/// let provider = OpenAiProvider::with_config(api_token, config)?;
/// ```
pub struct OpenAiProvider {
    api_token: String,
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiProvider {
    /// Create a new provider with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::with_config(api_token, OpenAiConfig::default())
    }

    /// Create a new provider with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(api_token: impl Into<String>, config: OpenAiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            api_token: api_token.into(),
            config,
            client,
        })
    }

    fn call_api(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            max_tokens: self.config.max_tokens,
        };

        debug!(
            "Requesting narrative from {} (model {})",
            self.config.base_url, self.config.model
        );

        let response = self
            .client
            .post(&self.config.base_url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .map_err(|e| ReportError::NarrativeGeneration(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ReportError::NarrativeGeneration(format!(
                "endpoint returned {status}: {body}"
            )));
        }

        let result: ChatResponse = response
            .json()
            .map_err(|e| ReportError::NarrativeGeneration(format!("malformed response: {e}")))?;

        extract_narrative(result)
    }
}

/// Pull the narrative out of the first completion choice.
fn extract_narrative(response: ChatResponse) -> Result<String> {
    response
        .choices
        .and_then(|mut choices| {
            if choices.is_empty() {
                None
            } else {
                choices.swap_remove(0).message
            }
        })
        .map(|msg| msg.content)
        .ok_or_else(|| {
            ReportError::NarrativeGeneration("response carried no completion content".to_string())
        })
}

impl NarrativeProvider for OpenAiProvider {
    fn generate_narrative(&self, prompt: &str) -> Result<String> {
        self.call_api(prompt)
    }

    fn name(&self) -> &str {
        "OpenAI"
    }

    fn model(&self) -> Option<&str> {
        Some(&self.config.model)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // ChatResponse parsing tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_parse_valid_response_structure() {
        let json = r#"{
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": "The dataset looks healthy."
                }
            }]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        let narrative = extract_narrative(response).unwrap();
        assert_eq!(narrative, "The dataset looks healthy.");
    }

    #[test]
    fn test_empty_choices_is_an_error() {
        let json = r#"{"choices": []}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        let err = extract_narrative(response).unwrap_err();
        assert_eq!(err.error_code(), "NARRATIVE_GENERATION_ERROR");
    }

    #[test]
    fn test_null_choices_is_an_error() {
        let json = r#"{"choices": null}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(extract_narrative(response).is_err());
    }

    #[test]
    fn test_missing_message_is_an_error() {
        let json = r#"{"choices": [{"message": null}]}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(extract_narrative(response).is_err());
    }

    #[test]
    fn test_malformed_message_fails_to_parse() {
        let json = r#"{"choices": [{"message": "not an object"}]}"#;
        let result: std::result::Result<ChatResponse, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    // -------------------------------------------------------------------------
    // Request envelope tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_request_envelope_wire_shape() {
        let request = ChatRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: "analyze this".to_string(),
                },
            ],
            max_tokens: 1000,
        };

        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["max_tokens"], 1000);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "analyze this");
    }

    // -------------------------------------------------------------------------
    // Config builder tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_config_builder_defaults() {
        let config = OpenAiConfig::builder().build();

        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_config_builder_custom_values() {
        let config = OpenAiConfig::builder()
            .model("gpt-4o")
            .max_tokens(2000)
            .timeout_secs(120)
            .base_url("https://custom.api.com/v1/chat/completions")
            .build();

        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.max_tokens, 2000);
        assert_eq!(config.timeout_secs, 120);
        assert_eq!(config.base_url, "https://custom.api.com/v1/chat/completions");
    }

    // -------------------------------------------------------------------------
    // Provider trait implementation tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_provider_name_and_model() {
        let provider = OpenAiProvider::new("test-token").unwrap();
        assert_eq!(provider.name(), "OpenAI");
        assert_eq!(provider.model(), Some(DEFAULT_MODEL));
    }
}
