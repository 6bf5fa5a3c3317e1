//! Prompt construction for model-info generation.

use crate::provider::CompletionRequest;

/// Token budget for one generated catalog entry.
pub const GENERATION_MAX_TOKENS: u32 = 1400;

/// Low temperature keeps the output close to the requested JSON shape.
pub const GENERATION_TEMPERATURE: f32 = 0.2;

pub fn system_prompt() -> &'static str {
    r#"You are a research assistant maintaining a catalog of AI models and tools (LLMs, image generators, and similar products).

When asked about a model or tool, respond with a single JSON object and nothing else. Do not wrap the JSON in markdown code fences and do not add commentary before or after it. If you are unsure about a detail, leave the corresponding list empty rather than inventing entries."#
}

pub fn model_info_prompt(model_name: &str) -> String {
    format!(
        r#"Provide catalog information for the AI model or tool named "{model_name}".

Return a JSON object with exactly these keys:
- "name": the canonical product name
- "description": a 2-3 sentence overview of what it is and what it is for
- "category": one of "llm", "image", "audio", "video", "code", "other"
- "features": array of short feature strings
- "pros": array of short strings describing strengths
- "cons": array of short strings describing weaknesses
- "useCases": array of typical use cases
- "alternatives": array of names of competing products
- "pricing": object with "free" (boolean, whether a free tier exists) and "plans" (array of objects with "name", "price" and "features")

Every array must be a JSON array of strings. "description" and "category" are required."#
    )
}

/// Assemble the full request for one generation action.
pub fn completion_request(model_name: &str) -> CompletionRequest {
    CompletionRequest {
        system: system_prompt().to_string(),
        user: model_info_prompt(model_name),
        max_tokens: GENERATION_MAX_TOKENS,
        temperature: GENERATION_TEMPERATURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_the_model_and_required_keys() {
        let prompt = model_info_prompt("Stable Diffusion");
        assert!(prompt.contains("\"Stable Diffusion\""));
        for key in [
            "description",
            "category",
            "features",
            "pros",
            "cons",
            "useCases",
            "alternatives",
            "pricing",
        ] {
            assert!(prompt.contains(key), "prompt should mention {key}");
        }
    }

    #[test]
    fn request_uses_generation_budget() {
        let req = completion_request("Claude");
        assert_eq!(req.max_tokens, GENERATION_MAX_TOKENS);
        assert_eq!(req.temperature, GENERATION_TEMPERATURE);
        assert!(!req.system.is_empty());
    }
}
