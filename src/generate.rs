//! Generation pipeline: prompt -> provider (with retry) -> normalize -> stamp.

use thiserror::Error;

use crate::draft::ModelInfoDraft;
use crate::normalize::{normalize, NormalizeError};
use crate::prompt;
use crate::provider::retry::RetryPolicy;
use crate::provider::{CompletionClient, ProviderClient, ProviderError};

/// Required fields every admin call site agrees on. Callers with stricter
/// needs pass their own list via [`ContentGenerator::with_required_fields`].
pub const DEFAULT_REQUIRED_FIELDS: &[&str] = &["description", "category"];

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The provider call itself failed; may be worth retrying later.
    #[error("{0}")]
    Provider(#[from] ProviderError),
    /// The provider answered but the text did not normalize. Reparsing the
    /// same text will not help; a fresh provider call might.
    #[error("{0}")]
    Normalize(#[from] NormalizeError),
}

/// One generation action: exactly one provider request per call (plus the
/// retry policy's re-issues), producing a fresh draft or a typed failure.
pub struct ContentGenerator {
    client: ProviderClient,
    retry: RetryPolicy,
    required_fields: Vec<String>,
}

impl ContentGenerator {
    pub fn new(client: ProviderClient) -> Self {
        Self {
            client,
            retry: RetryPolicy::default(),
            required_fields: DEFAULT_REQUIRED_FIELDS
                .iter()
                .map(|field| field.to_string())
                .collect(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_required_fields(mut self, fields: &[&str]) -> Self {
        self.required_fields = fields.iter().map(|field| field.to_string()).collect();
        self
    }

    pub fn model_id(&self) -> String {
        self.client.model_id()
    }

    /// Generate a normalized draft for `model_name`.
    ///
    /// Normalization failures are not answered with another provider call
    /// here; whether to re-prompt is the admin caller's decision.
    pub async fn generate(&self, model_name: &str) -> Result<ModelInfoDraft, GenerateError> {
        let req = prompt::completion_request(model_name);
        let raw = self.retry.run(&self.client, &req).await?;
        tracing::debug!(
            model_name,
            raw_len = raw.len(),
            "provider returned completion"
        );

        let required: Vec<&str> = self.required_fields.iter().map(String::as_str).collect();
        let mut draft = normalize(&raw, &required).inspect_err(|err| {
            tracing::warn!(model_name, "normalization failed: {err}");
        })?;

        if draft.name.is_none() {
            draft.name = Some(model_name.to_string());
        }
        draft.source_date = Some(chrono::Utc::now().format("%Y-%m-%d").to_string());
        Ok(draft)
    }
}
