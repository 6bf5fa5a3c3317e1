//! End-to-end generation tests: mocked provider -> normalizer -> catalog.

use httpmock::prelude::*;
use pretty_assertions::assert_eq;

use crate::catalog::{queries, Database};
use crate::generate::{ContentGenerator, GenerateError};
use crate::normalize::NormalizeError;
use crate::provider::retry::RetryPolicy;
use crate::provider::{OpenAiClient, ProviderClient};
use crate::tests::{fenced_payload, openai_envelope, sample_payload};

fn generator_for(server: &MockServer) -> ContentGenerator {
    let client = ProviderClient::OpenAi(OpenAiClient::new(
        "test-key".to_string(),
        None,
        Some(server.base_url()),
    ));
    ContentGenerator::new(client)
        .with_retry(RetryPolicy::default().with_base_delay(std::time::Duration::from_millis(1)))
}

#[tokio::test]
async fn fenced_provider_reply_becomes_a_stored_record() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200)
                .json_body(openai_envelope(&fenced_payload()));
        })
        .await;

    let draft = generator_for(&server).generate("Claude").await.unwrap();
    assert_eq!(draft.name.as_deref(), Some("Claude"));
    assert_eq!(draft.category.as_deref(), Some("llm"));
    assert!(draft.source_date.is_some());
    assert_eq!(draft.use_cases.len(), 2);
    assert!(draft.pricing.free);

    let db = Database::open_in_memory().expect("in-memory DB");
    let row = queries::upsert_draft(&db, "Claude", &draft).unwrap();
    let stored = queries::get_model_by_name(&db, "Claude").unwrap().unwrap();
    assert_eq!(stored.id, row.id);
    assert_eq!(stored.to_draft().unwrap(), draft);
}

#[tokio::test]
async fn prose_only_reply_fails_as_malformed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200)
                .json_body(openai_envelope("I cannot help with that."));
        })
        .await;

    let err = generator_for(&server).generate("Claude").await.unwrap_err();
    match err {
        GenerateError::Normalize(NormalizeError::Malformed { raw, .. }) => {
            assert_eq!(raw, "I cannot help with that.");
        }
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[tokio::test]
async fn reply_missing_category_fails_as_incomplete() {
    let server = MockServer::start_async().await;
    let mut payload = sample_payload();
    payload.as_object_mut().unwrap().remove("category");
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200)
                .json_body(openai_envelope(&payload.to_string()));
        })
        .await;

    let err = generator_for(&server).generate("Claude").await.unwrap_err();
    match err {
        GenerateError::Normalize(NormalizeError::Incomplete { missing, .. }) => {
            assert_eq!(missing, vec!["category".to_string()]);
        }
        other => panic!("expected Incomplete, got {other:?}"),
    }
}

#[tokio::test]
async fn caller_supplied_required_fields_are_honored() {
    let server = MockServer::start_async().await;
    let mut payload = sample_payload();
    payload.as_object_mut().unwrap().remove("category");
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200)
                .json_body(openai_envelope(&payload.to_string()));
        })
        .await;

    // A call site that only needs a description accepts the same reply.
    let draft = generator_for(&server)
        .with_required_fields(&["description"])
        .generate("Claude")
        .await
        .unwrap();
    assert!(draft.category.is_none());
}

#[tokio::test]
async fn missing_name_falls_back_to_requested_model() {
    let server = MockServer::start_async().await;
    let mut payload = sample_payload();
    payload.as_object_mut().unwrap().remove("name");
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200)
                .json_body(openai_envelope(&payload.to_string()));
        })
        .await;

    let draft = generator_for(&server)
        .generate("Mystery Model")
        .await
        .unwrap();
    assert_eq!(draft.name.as_deref(), Some("Mystery Model"));
}

#[tokio::test]
async fn transient_provider_failure_recovers_within_retry_budget() {
    let server = MockServer::start_async().await;
    // First attempt hits a 500; the mock is then swapped for a success.
    let failing = server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(500).body("internal error");
        })
        .await;

    // Backoff long enough that the mock swap below lands before the retry.
    let client = ProviderClient::OpenAi(OpenAiClient::new(
        "test-key".to_string(),
        None,
        Some(server.base_url()),
    ));
    let generator = ContentGenerator::new(client).with_retry(
        RetryPolicy::default().with_base_delay(std::time::Duration::from_millis(500)),
    );
    let handle = tokio::spawn(async move { generator.generate("Claude").await });

    // Let the first attempt fail, then replace the mock before the retry.
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    failing.delete_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200)
                .json_body(openai_envelope(&fenced_payload()));
        })
        .await;

    let draft = handle.await.unwrap().unwrap();
    assert_eq!(draft.name.as_deref(), Some("Claude"));
}
