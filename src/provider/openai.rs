//! OpenAI chat-completions client (non-streaming).

use serde::{Deserialize, Serialize};

use super::{error_for_status, http_client, CompletionClient, CompletionRequest, ProviderError};

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

pub struct OpenAiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a new OpenAI client.
    ///
    /// # Environment Variables
    /// Set these to configure OpenAI without hardcoding:
    /// * `OPENAI_API_KEY` - Your API key
    /// * `OPENAI_MODEL` - Model to use (default: "gpt-4o-mini")
    /// * `OPENAI_BASE_URL` - Custom base URL if needed
    pub fn new(api_key: String, model: Option<String>, base_url: Option<String>) -> Self {
        Self {
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            client: http_client(),
        }
    }
}

impl CompletionClient for OpenAiClient {
    fn model_id(&self) -> String {
        self.model.clone()
    }

    async fn complete(&self, req: &CompletionRequest) -> Result<String, ProviderError> {
        let endpoint = format!(
            "{}/v1/chat/completions",
            self.base_url.trim_end_matches('/')
        );
        let body = OpenAiChatRequest {
            model: self.model.clone(),
            messages: vec![
                OpenAiMessage {
                    role: "system".to_string(),
                    content: req.system.clone(),
                },
                OpenAiMessage {
                    role: "user".to_string(),
                    content: req.user.clone(),
                },
            ],
            temperature: req.temperature,
            max_tokens: req.max_tokens,
            stream: false,
        };

        let response = self
            .client
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;

        tracing::debug!("openai API response: status={}", status);

        if !status.is_success() {
            return Err(error_for_status("openai", status, &text));
        }

        let parsed: OpenAiChatResponse = serde_json::from_str(&text)
            .map_err(|e| ProviderError::InvalidResponse(format!("openai parse failed: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                ProviderError::InvalidResponse(
                    "missing choices[0].message.content in openai response".to_string(),
                )
            })
    }
}

#[derive(Debug, Serialize)]
struct OpenAiChatRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiChatResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    #[serde(default)]
    content: Option<String>,
}
