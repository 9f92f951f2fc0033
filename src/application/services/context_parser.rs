use crate::domain::{FileCategory, PromptContext};

const CONTEXT_HEADER: &str = "Context from uploaded files:\n";
const QUERY_SEPARATOR: &str = "\n\nUser Query: ";
const FILE_MARKER: &str = "File: ";
const CATEGORY_OPEN: &str = " (";
const CATEGORY_CLOSE: char = ')';
const CONTENT_MARKER: &str = "Content:";
const CONTENT_TERMINATOR: &str = "...";

/// A prompt split into the optional file context and the user's own query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPrompt {
    pub context: Option<PromptContext>,
    pub query: String,
}

/// Why an embedded file context could not be reconstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContextParseError {
    #[error("no context header")]
    MissingHeader,
    #[error("no user query separator after context header")]
    MissingQuerySeparator,
    #[error("empty file block")]
    EmptyFileBlock,
    #[error("empty user query")]
    EmptyQuery,
    #[error("no `File: <name> (<category>)` line in file block")]
    MissingFileHeader,
}

/// Splits a prompt into file context and query. Any parse failure falls back
/// to treating the whole prompt as the query.
pub fn parse_prompt(prompt: &str) -> ParsedPrompt {
    match try_parse_prompt(prompt) {
        Ok((context, query)) => ParsedPrompt {
            context: Some(context),
            query: query.to_string(),
        },
        Err(reason) => {
            if reason != ContextParseError::MissingHeader {
                tracing::debug!(reason = %reason, "Prompt context ignored");
            }
            ParsedPrompt {
                context: None,
                query: prompt.to_string(),
            }
        }
    }
}

pub fn try_parse_prompt(prompt: &str) -> Result<(PromptContext, &str), ContextParseError> {
    let (file_block, query) = split_sections(prompt)?;
    let (file_name, category) = file_header(file_block)?;

    let content = category
        .carries_inline_text()
        .then(|| inline_content(file_block))
        .flatten()
        .unwrap_or_else(|| category.placeholder());

    Ok((
        PromptContext::new(file_name.to_string(), category, Some(content)),
        query,
    ))
}

fn split_sections(prompt: &str) -> Result<(&str, &str), ContextParseError> {
    let header_at = prompt
        .find(CONTEXT_HEADER)
        .ok_or(ContextParseError::MissingHeader)?;
    let body = &prompt[header_at + CONTEXT_HEADER.len()..];

    let separator_at = body
        .find(QUERY_SEPARATOR)
        .ok_or(ContextParseError::MissingQuerySeparator)?;
    let file_block = &body[..separator_at];
    let query = &body[separator_at + QUERY_SEPARATOR.len()..];

    if file_block.is_empty() {
        return Err(ContextParseError::EmptyFileBlock);
    }
    if query.is_empty() {
        return Err(ContextParseError::EmptyQuery);
    }
    Ok((file_block, query))
}

/// Finds the first `File: <name> (<category>)` whose parts sit on one line.
fn file_header(block: &str) -> Result<(&str, FileCategory), ContextParseError> {
    let mut cursor = 0;
    while let Some(offset) = block[cursor..].find(FILE_MARKER) {
        let start = cursor + offset + FILE_MARKER.len();
        let line = block[start..].split('\n').next().unwrap_or_default();

        if let Some(open) = line.find(CATEGORY_OPEN) {
            let rest = &line[open + CATEGORY_OPEN.len()..];
            if let Some(close) = rest.find(CATEGORY_CLOSE) {
                return Ok((&line[..open], FileCategory::parse(&rest[..close])));
            }
        }
        cursor = start;
    }
    Err(ContextParseError::MissingFileHeader)
}

fn inline_content(block: &str) -> Option<String> {
    let start = block.find(CONTENT_MARKER)? + CONTENT_MARKER.len();
    let tail = &block[start..];
    let end = tail.find(CONTENT_TERMINATOR).unwrap_or(tail.len());
    Some(tail[..end].trim().to_string())
}
