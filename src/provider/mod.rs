//! LLM provider boundary: provider ids, the typed transport error taxonomy,
//! and the per-provider completion clients.
//!
//! Transport failures are mapped here, before the normalizer ever runs, so
//! they can never be smuggled into the text it parses.

mod anthropic;
mod openai;
pub mod retry;

pub use anthropic::AnthropicClient;
pub use openai::OpenAiClient;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

/// Default timeout applied to every provider HTTP call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Supported completion providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    OpenAi,
    Anthropic,
}

impl ProviderId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenAi => "openai",
            ProviderId::Anthropic => "anthropic",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::OpenAi, ProviderId::Anthropic]
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "openai" | "gpt" => Ok(ProviderId::OpenAi),
            "anthropic" | "claude" => Ok(ProviderId::Anthropic),
            _ => Err(format!("unknown provider: {}", s)),
        }
    }
}

impl serde::Serialize for ProviderId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for ProviderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ProviderId::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Transport-level failure of a provider call. Distinct from the
/// normalizer's errors: these short-circuit before normalization runs.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("auth error: {0}")]
    Auth(String),
    #[error("api error: {0}")]
    Api(String),
    #[error("invalid response envelope: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Only transient failures are worth re-issuing the call for.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ProviderError::Unavailable(_) | ProviderError::RateLimited(_)
        )
    }
}

/// A single completion request: one prompt in, free-form text out.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Core trait for completion clients, implemented per provider.
#[allow(async_fn_in_trait)]
pub trait CompletionClient: Send + Sync {
    fn model_id(&self) -> String;
    async fn complete(&self, req: &CompletionRequest) -> Result<String, ProviderError>;
}

/// Runtime-selected provider client.
pub enum ProviderClient {
    OpenAi(OpenAiClient),
    Anthropic(AnthropicClient),
}

impl CompletionClient for ProviderClient {
    fn model_id(&self) -> String {
        match self {
            ProviderClient::OpenAi(client) => client.model_id(),
            ProviderClient::Anthropic(client) => client.model_id(),
        }
    }

    async fn complete(&self, req: &CompletionRequest) -> Result<String, ProviderError> {
        match self {
            ProviderClient::OpenAi(client) => client.complete(req).await,
            ProviderClient::Anthropic(client) => client.complete(req).await,
        }
    }
}

/// Map a non-success HTTP status to the error taxonomy. Shared by both
/// clients so status handling cannot drift between them.
pub(crate) fn error_for_status(
    provider: &str,
    status: reqwest::StatusCode,
    body: &str,
) -> ProviderError {
    match status.as_u16() {
        401 | 403 => ProviderError::Auth(format!(
            "{provider} auth failed ({status}). Check API key and account access."
        )),
        429 => ProviderError::RateLimited(format!("{provider} rate limit ({status}): {body}")),
        code if code >= 500 => {
            ProviderError::Unavailable(format!("{provider} error {status}: {body}"))
        }
        _ => ProviderError::Api(format!("{provider} error {status}: {body}")),
    }
}

/// Build the shared HTTP client with the default request timeout.
pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(DEFAULT_REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
