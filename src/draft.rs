//! Canonical draft record produced from a provider completion.
//!
//! This is the single shape every call site validates against; callers that
//! need fewer fields pass a smaller `required_fields` list to the normalizer
//! instead of declaring their own ad hoc variant.

use serde::{Deserialize, Serialize};

/// One paid tier in the structured pricing shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Structured pricing: whether a free tier exists plus the paid plans.
///
/// `plans` is guaranteed to be a list after normalization even when the
/// provider returned something else for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    #[serde(default)]
    pub free: bool,
    #[serde(default)]
    pub plans: Vec<PricingPlan>,
}

/// A normalized, validated model-info record.
///
/// Constructed fresh per generation request and never mutated after being
/// handed to the caller. Downstream code indexes and maps over the list
/// fields without further guarding, so they are always present as arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInfoDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Accepts the legacy `modelType` wire key as an alias.
    #[serde(default, alias = "modelType")]
    pub category: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default, alias = "useCases")]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub alternatives: Vec<String>,
    #[serde(default)]
    pub pricing: Pricing,
    /// ISO date stamped by the generation pipeline, never by the provider.
    #[serde(default, alias = "sourceDate")]
    pub source_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_camel_case_aliases() {
        let draft: ModelInfoDraft = serde_json::from_str(
            r#"{
                "description": "A general purpose LLM",
                "modelType": "llm",
                "useCases": ["chat", "coding"]
            }"#,
        )
        .unwrap();
        assert_eq!(draft.category.as_deref(), Some("llm"));
        assert_eq!(draft.use_cases, vec!["chat", "coding"]);
        assert!(draft.features.is_empty());
    }

    #[test]
    fn missing_pricing_defaults_to_empty_plans() {
        let draft: ModelInfoDraft = serde_json::from_str(r#"{"description": "x"}"#).unwrap();
        assert!(!draft.pricing.free);
        assert!(draft.pricing.plans.is_empty());
    }
}
