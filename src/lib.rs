//! Model catalog backend library.
//!
//! Backend for an AI-model catalog application: admins pick a model name,
//! the backend asks an LLM provider for a structured catalog entry,
//! normalizes the untrusted reply into a validated draft, and persists the
//! curated record.
//!
//! # Architecture
//!
//! - `normalize`: the response normalizer (de-fence, parse, validate, coerce)
//! - `draft`: the canonical generated-record shape
//! - `provider`: LLM API clients (OpenAI, Anthropic) and the retry policy
//! - `prompt`: prompt construction for generation requests
//! - `generate`: the end-to-end generation pipeline
//! - `catalog`: SQLite-backed store for curated records
//! - `config`: environment-based provider configuration

pub mod catalog;
pub mod config;
pub mod draft;
pub mod generate;
pub mod normalize;
pub mod prompt;
pub mod provider;

#[cfg(test)]
mod tests;
