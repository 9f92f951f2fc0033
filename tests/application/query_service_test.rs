use std::sync::Arc;

use multimodal_proxy::application::ports::{InteractionRepository, LlmClientError};
use multimodal_proxy::application::services::{
    NO_RESPONSE_FALLBACK, QueryService, QueryServiceError,
};
use multimodal_proxy::infrastructure::persistence::InMemoryInteractionRepository;

use crate::helpers::MockLlmClient;

fn create_service(
    llm_client: MockLlmClient,
) -> (
    QueryService<MockLlmClient>,
    Arc<MockLlmClient>,
    Arc<InMemoryInteractionRepository>,
) {
    let llm_client = Arc::new(llm_client);
    let repository = Arc::new(InMemoryInteractionRepository::default());
    let service = QueryService::new(
        Arc::clone(&llm_client),
        Arc::clone(&repository) as Arc<dyn InteractionRepository>,
    );
    (service, llm_client, repository)
}

#[tokio::test]
async fn given_missing_or_empty_prompt_when_answered_then_validation_error() {
    let (service, llm_client, _) = create_service(MockLlmClient::answering(Some("unused")));

    for prompt in [None, Some("")] {
        let err = service.answer(prompt).await.unwrap_err();
        assert!(matches!(err, QueryServiceError::Validation(_)));
        assert_eq!(err.to_string(), "Prompt is required");
    }
    assert!(llm_client.prompts().is_empty());
}

#[tokio::test]
async fn given_plain_prompt_when_answered_then_interaction_is_recorded() {
    let (service, llm_client, repository) =
        create_service(MockLlmClient::answering(Some("Paris")));

    let interaction = service
        .answer(Some("What is the capital of France?"))
        .await
        .unwrap();

    assert_eq!(interaction.response, "Paris");
    assert_eq!(interaction.query, "What is the capital of France?");
    assert!(interaction.file.is_none());
    assert_eq!(llm_client.prompts(), vec!["What is the capital of France?"]);

    let stored = repository.get_by_id(interaction.id).await.unwrap();
    assert_eq!(stored, Some(interaction));
}

#[tokio::test]
async fn given_prompt_with_file_context_when_answered_then_full_prompt_is_forwarded() {
    let (service, llm_client, _) = create_service(MockLlmClient::answering(Some("A greeting")));
    let prompt =
        "Context from uploaded files:\nFile: report.pdf (text)\nContent: Hello world...\n\nUser Query: What is this?";

    let interaction = service.answer(Some(prompt)).await.unwrap();

    assert_eq!(llm_client.prompts(), vec![prompt]);
    assert_eq!(interaction.query, "What is this?");
    let file = interaction.file.expect("file context should be recorded");
    assert_eq!(file.name, "report.pdf");
    assert_eq!(file.category, "text");
    assert_eq!(file.content.as_deref(), Some("Hello world"));
}

#[tokio::test]
async fn given_llm_returns_no_text_when_answered_then_fallback_answer_is_used() {
    let (service, _, _) = create_service(MockLlmClient::answering(None));

    let interaction = service.answer(Some("Say nothing")).await.unwrap();

    assert_eq!(interaction.response, NO_RESPONSE_FALLBACK);
    assert_eq!(interaction.response, "No response generated");
}

#[tokio::test]
async fn given_llm_upstream_failure_when_answered_then_error_and_nothing_recorded() {
    let (service, _, repository) =
        create_service(MockLlmClient::failing(429, "quota exceeded"));

    let err = service.answer(Some("Hello")).await.unwrap_err();

    assert!(matches!(
        err,
        QueryServiceError::Llm(LlmClientError::UpstreamStatus { status: 429, .. })
    ));
    assert!(repository.list_recent(10).await.unwrap().is_empty());
}
