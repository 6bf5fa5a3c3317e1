//! Anthropic messages-API client (non-streaming).
//!
//! Unlike the OpenAI wire format the system prompt travels as a top-level
//! `system` field and the reply content arrives as typed blocks; only the
//! first `text` block is used here.

use serde::{Deserialize, Serialize};

use super::{error_for_status, http_client, CompletionClient, CompletionRequest, ProviderError};

const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-haiku-latest";
const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct AnthropicClient {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl AnthropicClient {
    /// Create a new Anthropic client.
    ///
    /// # Environment Variables
    /// Set these to configure Anthropic without hardcoding:
    /// * `ANTHROPIC_API_KEY` - Your API key
    /// * `ANTHROPIC_MODEL` - Model to use (default: "claude-3-5-haiku-latest")
    /// * `ANTHROPIC_BASE_URL` - Custom base URL if needed
    pub fn new(api_key: String, model: Option<String>, base_url: Option<String>) -> Self {
        Self {
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_ANTHROPIC_MODEL.to_string()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_ANTHROPIC_BASE_URL.to_string()),
            client: http_client(),
        }
    }
}

impl CompletionClient for AnthropicClient {
    fn model_id(&self) -> String {
        self.model.clone()
    }

    async fn complete(&self, req: &CompletionRequest) -> Result<String, ProviderError> {
        let endpoint = format!("{}/v1/messages", self.base_url.trim_end_matches('/'));
        let body = AnthropicMessagesRequest {
            model: self.model.clone(),
            max_tokens: req.max_tokens,
            temperature: req.temperature,
            system: req.system.clone(),
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: req.user.clone(),
            }],
        };

        let response = self
            .client
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;

        tracing::debug!("anthropic API response: status={}", status);

        if !status.is_success() {
            return Err(error_for_status("anthropic", status, &text));
        }

        let parsed: AnthropicMessagesResponse = serde_json::from_str(&text)
            .map_err(|e| ProviderError::InvalidResponse(format!("anthropic parse failed: {e}")))?;

        parsed
            .content
            .into_iter()
            .find(|block| block.block_type == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| {
                ProviderError::InvalidResponse(
                    "missing text content block in anthropic response".to_string(),
                )
            })
    }
}

#[derive(Debug, Serialize)]
struct AnthropicMessagesRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    system: String,
    messages: Vec<AnthropicMessage>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicMessagesResponse {
    #[serde(default)]
    content: Vec<AnthropicContentBlock>,
}

#[derive(Debug, Deserialize)]
struct AnthropicContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: Option<String>,
}
