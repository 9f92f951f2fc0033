use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TranscriptStatus {
    Queued,
    Processing,
    Completed,
    Error,
    Other(String),
}

impl TranscriptStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TranscriptStatus::Queued => "queued",
            TranscriptStatus::Processing => "processing",
            TranscriptStatus::Completed => "completed",
            TranscriptStatus::Error => "error",
            TranscriptStatus::Other(raw) => raw,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TranscriptStatus::Completed | TranscriptStatus::Error)
    }
}

impl From<&str> for TranscriptStatus {
    fn from(s: &str) -> Self {
        match s {
            "queued" => TranscriptStatus::Queued,
            "processing" => TranscriptStatus::Processing,
            "completed" => TranscriptStatus::Completed,
            "error" => TranscriptStatus::Error,
            other => TranscriptStatus::Other(other.to_string()),
        }
    }
}

impl FromStr for TranscriptStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TranscriptStatus::from(s))
    }
}

impl<'de> Deserialize<'de> for TranscriptStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(TranscriptStatus::from(raw.as_str()))
    }
}

impl fmt::Display for TranscriptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
