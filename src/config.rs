//! Environment-based provider configuration.

use thiserror::Error;

use crate::provider::{AnthropicClient, OpenAiClient, ProviderClient, ProviderId};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing or empty environment variable {0}")]
    MissingKey(&'static str),
}

/// Connection settings for one provider, read from the environment.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub provider: ProviderId,
    pub api_key: String,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

impl ProviderConfig {
    /// Read `<PROVIDER>_API_KEY` (required) plus optional `<PROVIDER>_MODEL`
    /// and `<PROVIDER>_BASE_URL` overrides.
    pub fn from_env(provider: ProviderId) -> Result<Self, ConfigError> {
        let (key_var, model_var, url_var) = match provider {
            ProviderId::OpenAi => ("OPENAI_API_KEY", "OPENAI_MODEL", "OPENAI_BASE_URL"),
            ProviderId::Anthropic => (
                "ANTHROPIC_API_KEY",
                "ANTHROPIC_MODEL",
                "ANTHROPIC_BASE_URL",
            ),
        };
        let api_key = std::env::var(key_var)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingKey(key_var))?;
        Ok(Self {
            provider,
            api_key,
            model: non_empty_var(model_var),
            base_url: non_empty_var(url_var),
        })
    }

    pub fn into_client(self) -> ProviderClient {
        match self.provider {
            ProviderId::OpenAi => {
                ProviderClient::OpenAi(OpenAiClient::new(self.api_key, self.model, self.base_url))
            }
            ProviderId::Anthropic => ProviderClient::Anthropic(AnthropicClient::new(
                self.api_key,
                self.model,
                self.base_url,
            )),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
