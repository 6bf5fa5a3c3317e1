//! Integration test helpers and suites.

#[cfg(test)]
mod generation;


use serde_json::json;

/// A complete, well-formed provider payload for one catalog entry.
pub fn sample_payload() -> serde_json::Value {
    json!({
        "name": "Claude",
        "description": "A family of large language models built for reasoning and coding.",
        "category": "llm",
        "features": ["long context", "tool use"],
        "pros": ["strong reasoning", "good instruction following"],
        "cons": ["closed weights"],
        "useCases": ["coding assistants", "document analysis"],
        "alternatives": ["GPT-4o", "Gemini"],
        "pricing": {
            "free": true,
            "plans": [
                {"name": "Pro", "price": "$20/mo", "features": ["higher limits"]}
            ]
        }
    })
}

/// The same payload as the provider tends to return it: fenced.
pub fn fenced_payload() -> String {
    format!("```json\n{}\n```", sample_payload())
}

/// Wrap text in an OpenAI chat-completions envelope.
pub fn openai_envelope(content: &str) -> serde_json::Value {
    json!({
        "choices": [
            {"message": {"role": "assistant", "content": content}}
        ]
    })
}

/// Wrap text in an Anthropic messages envelope.
pub fn anthropic_envelope(text: &str) -> serde_json::Value {
    json!({
        "role": "assistant",
        "content": [
            {"type": "text", "text": text}
        ]
    })
}
