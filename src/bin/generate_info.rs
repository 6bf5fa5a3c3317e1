//! Admin CLI: generate catalog content for a model name and store it.
//!
//! Usage:
//!   generate_info --name "Stable Diffusion" [--provider openai|anthropic]
//!                 [--db catalog.db] [--require FIELD ...] [--dry-run]
//!
//! Provider credentials come from the environment (OPENAI_API_KEY /
//! ANTHROPIC_API_KEY, with optional *_MODEL and *_BASE_URL overrides);
//! a local .env file is honored.

use std::path::PathBuf;
use std::str::FromStr;

use modeldeck::catalog::{queries, Database};
use modeldeck::config::ProviderConfig;
use modeldeck::generate::{ContentGenerator, GenerateError};
use modeldeck::provider::ProviderId;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "modeldeck=debug,info".parse().expect("valid env filter")),
        )
        .init();

    let mut provider = ProviderId::OpenAi;
    let mut name: Option<String> = None;
    let mut db_path = PathBuf::from("catalog.db");
    let mut required: Vec<String> = Vec::new();
    let mut dry_run = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--provider" => {
                let value = args.next().ok_or("--provider requires a value")?;
                provider = ProviderId::from_str(&value)?;
            }
            "--name" => {
                name = Some(args.next().ok_or("--name requires a value")?);
            }
            "--db" => {
                db_path = PathBuf::from(args.next().ok_or("--db requires a value")?);
            }
            "--require" => {
                required.push(args.next().ok_or("--require requires a value")?);
            }
            "--dry-run" => dry_run = true,
            other => {
                return Err(format!(
                    "unsupported argument '{other}'. Use --provider, --name, --db, --require, --dry-run"
                ))
            }
        }
    }
    let name = name.ok_or("--name is required")?;

    let config = ProviderConfig::from_env(provider).map_err(|e| e.to_string())?;
    let mut generator = ContentGenerator::new(config.into_client());
    if !required.is_empty() {
        let fields: Vec<&str> = required.iter().map(String::as_str).collect();
        generator = generator.with_required_fields(&fields);
    }

    tracing::info!(
        "generating catalog entry for '{name}' via {provider} ({})",
        generator.model_id()
    );

    let draft = match generator.generate(&name).await {
        Ok(draft) => draft,
        Err(GenerateError::Provider(err)) => {
            return Err(format!("provider call failed: {err}"));
        }
        Err(GenerateError::Normalize(err)) => {
            // Raw provider text stays in the logs; the user gets a generic message.
            tracing::warn!("normalization failed for '{name}': {err:?}");
            return Err("couldn't generate content for this model, try again".to_string());
        }
    };

    if dry_run {
        let text = serde_json::to_string_pretty(&draft).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    let db = Database::open(&db_path).map_err(|e| e.to_string())?;
    let row = queries::upsert_draft(&db, &name, &draft).map_err(|e| e.to_string())?;
    let stored = row.to_draft().map_err(|e| e.to_string())?;
    let text = serde_json::to_string_pretty(&stored).map_err(|e| e.to_string())?;
    println!("stored record {}:\n{text}", row.id);
    Ok(())
}
