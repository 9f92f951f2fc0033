use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One sentiment-analysis entry exactly as the provider reported it.
///
/// The entry is kept as raw JSON so any shape the provider sends reaches the
/// client unchanged; accessors read the well-known fields when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentimentSegment(Value);

impl SentimentSegment {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    pub fn text(&self) -> Option<&str> {
        self.field("text")?.as_str()
    }

    pub fn sentiment(&self) -> Option<&str> {
        self.field("sentiment")?.as_str()
    }

    pub fn confidence(&self) -> Option<f64> {
        self.field("confidence")?.as_f64()
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for SentimentSegment {
    fn from(raw: Value) -> Self {
        Self(raw)
    }
}
