use std::sync::Arc;

use crate::application::ports::{
    InteractionRepository, LlmClient, LlmClientError, RepositoryError,
};
use crate::domain::{Interaction, InteractionFile};

use super::context_parser::parse_prompt;

pub const NO_RESPONSE_FALLBACK: &str = "No response generated";

/// Forwards prompts to the generative-language API and records each exchange.
pub struct QueryService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
    interaction_repository: Arc<dyn InteractionRepository>,
}

impl<L> QueryService<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>, interaction_repository: Arc<dyn InteractionRepository>) -> Self {
        Self {
            llm_client,
            interaction_repository,
        }
    }

    pub async fn answer(&self, prompt: Option<&str>) -> Result<Interaction, QueryServiceError> {
        let prompt = prompt
            .filter(|p| !p.is_empty())
            .ok_or_else(|| QueryServiceError::Validation("Prompt is required".to_string()))?;

        let parsed = parse_prompt(prompt);
        tracing::debug!(
            has_file_context = parsed.context.is_some(),
            file_name = parsed.context.as_ref().map(|c| c.file_name.as_str()),
            "Prompt parsed"
        );

        let answer = self
            .llm_client
            .generate(prompt)
            .await
            .map_err(QueryServiceError::Llm)?
            .unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string());

        let interaction = Interaction::new(
            parsed.context.as_ref().map(InteractionFile::from),
            parsed.query,
            answer,
        );

        self.interaction_repository
            .save(&interaction)
            .await
            .map_err(QueryServiceError::Repository)?;

        tracing::info!(interaction_id = %interaction.id.as_uuid(), "Response generated");
        Ok(interaction)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QueryServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("completion: {0}")]
    Llm(LlmClientError),
    #[error("repository: {0}")]
    Repository(RepositoryError),
}
