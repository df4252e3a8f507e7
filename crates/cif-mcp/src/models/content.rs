//! MCP content blocks returned from `tools/call`.

use serde::{Deserialize, Serialize};

/// A single content item. Only text blocks are produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
}

impl Content {
    /// Create a text block.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Text of the block.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text { text } => text,
        }
    }
}

/// Result of a tool call: the `result` member of a `tools/call` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub content: Vec<Content>,
}

impl ToolOutput {
    /// Wrap a single text block.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self { content: vec![Content::text(text)] }
    }

    /// Text of the first block, if any.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(Content::as_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_wire_shape() {
        let output = ToolOutput::text("hello");
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json, serde_json::json!({"content": [{"type": "text", "text": "hello"}]}));
        assert_eq!(output.first_text(), Some("hello"));
    }
}
