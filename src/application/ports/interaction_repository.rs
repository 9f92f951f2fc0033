use async_trait::async_trait;

use crate::domain::{Interaction, InteractionId};

use super::RepositoryError;

#[async_trait]
pub trait InteractionRepository: Send + Sync {
    async fn save(&self, interaction: &Interaction) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: InteractionId) -> Result<Option<Interaction>, RepositoryError>;

    async fn list_recent(&self, limit: usize) -> Result<Vec<Interaction>, RepositoryError>;
}
