use std::collections::{HashMap, VecDeque};

use tokio::sync::RwLock;

use crate::application::ports::{InteractionRepository, RepositoryError};
use crate::domain::{Interaction, InteractionId};

pub const DEFAULT_INTERACTION_CAPACITY: usize = 1000;

#[derive(Default)]
struct InteractionLog {
    by_id: HashMap<InteractionId, Interaction>,
    order: VecDeque<InteractionId>,
}

/// Process-local interaction store holding the most recent `capacity`
/// records. Older records are evicted first and everything is lost on restart.
pub struct InMemoryInteractionRepository {
    capacity: usize,
    log: RwLock<InteractionLog>,
}

impl InMemoryInteractionRepository {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            log: RwLock::new(InteractionLog::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryInteractionRepository {
    fn default() -> Self {
        Self::new(DEFAULT_INTERACTION_CAPACITY)
    }
}

#[async_trait::async_trait]
impl InteractionRepository for InMemoryInteractionRepository {
    async fn save(&self, interaction: &Interaction) -> Result<(), RepositoryError> {
        let mut log = self.log.write().await;
        if log.by_id.contains_key(&interaction.id) {
            return Err(RepositoryError::Duplicate(
                interaction.id.as_uuid().to_string(),
            ));
        }

        log.order.push_back(interaction.id);
        log.by_id.insert(interaction.id, interaction.clone());

        while log.order.len() > self.capacity {
            if let Some(evicted) = log.order.pop_front() {
                log.by_id.remove(&evicted);
                tracing::debug!(interaction_id = %evicted.as_uuid(), "Interaction evicted");
            }
        }
        Ok(())
    }

    async fn get_by_id(&self, id: InteractionId) -> Result<Option<Interaction>, RepositoryError> {
        let log = self.log.read().await;
        Ok(log.by_id.get(&id).cloned())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Interaction>, RepositoryError> {
        let log = self.log.read().await;
        Ok(log
            .order
            .iter()
            .rev()
            .take(limit)
            .filter_map(|id| log.by_id.get(id).cloned())
            .collect())
    }
}
