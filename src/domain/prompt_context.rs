use std::fmt;

/// Category label attached to a file reference inside a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Text,
    Image,
    Audio,
    Video,
    Other(String),
}

impl FileCategory {
    pub fn parse(label: &str) -> Self {
        match label {
            "text" => Self::Text,
            "image" => Self::Image,
            "audio" => Self::Audio,
            "video" => Self::Video,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Other(label) => label,
        }
    }

    pub fn carries_inline_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    /// Description used when no inline text is available for the file.
    pub fn placeholder(&self) -> String {
        match self {
            Self::Image => "Image file uploaded (visual content available)".to_string(),
            Self::Audio => "Audio file uploaded (auditory content available)".to_string(),
            Self::Video => {
                "Video file uploaded (visual and auditory content available)".to_string()
            }
            other => format!("{} file uploaded", other.as_str()),
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File metadata reconstructed from a freeform prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptContext {
    pub file_name: String,
    pub category: FileCategory,
    pub content: Option<String>,
}

impl PromptContext {
    pub fn new(file_name: String, category: FileCategory, content: Option<String>) -> Self {
        Self {
            file_name,
            category,
            content,
        }
    }
}
