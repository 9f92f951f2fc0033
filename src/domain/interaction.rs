use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::PromptContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct InteractionId(Uuid);

impl InteractionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for InteractionId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionFile {
    pub name: String,
    pub category: String,
    pub content: Option<String>,
    pub assemblyai_id: Option<String>,
    pub sentiment: Option<String>,
    pub summary: Option<String>,
}

impl From<&PromptContext> for InteractionFile {
    fn from(context: &PromptContext) -> Self {
        Self {
            name: context.file_name.clone(),
            category: context.category.as_str().to_string(),
            content: context.content.clone(),
            assemblyai_id: None,
            sentiment: None,
            summary: None,
        }
    }
}

/// A query/answer exchange with the generative-language API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub id: InteractionId,
    pub file: Option<InteractionFile>,
    pub query: String,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

impl Interaction {
    pub fn new(file: Option<InteractionFile>, query: String, response: String) -> Self {
        Self {
            id: InteractionId::new(),
            file,
            query,
            response,
            timestamp: Utc::now(),
        }
    }
}
