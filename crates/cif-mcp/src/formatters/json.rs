//! JSON text-block formatting.
//!
//! Every tool call ends here and yields exactly one text content item.

use serde::Serialize;

use crate::error::{ToolError, ToolResult};
use crate::models::ToolOutput;

/// Serialize an envelope as pretty JSON (2-space indent, struct field order).
pub fn to_pretty_json<T: Serialize>(envelope: &T) -> ToolResult<String> {
    Ok(serde_json::to_string_pretty(envelope)?)
}

/// Wrap already-rendered JSON as a tool output.
#[must_use]
pub fn text_output(json: String) -> ToolOutput {
    ToolOutput::text(json)
}

/// Render a tool failure as `Error: {message}`.
#[must_use]
pub fn error_output(error: &ToolError) -> ToolOutput {
    ToolOutput::text(format!("Error: {}", error.to_user_message()))
}

/// Render a tool result, success or failure, as a single text block.
#[must_use]
pub fn render(result: ToolResult<String>) -> ToolOutput {
    match result {
        Ok(json) => text_output(json),
        Err(e) => error_output(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SearchResponse, SearchResult};

    #[test]
    fn test_pretty_json_uses_two_space_indent_and_field_order() {
        let envelope = SearchResponse::new(vec![SearchResult {
            paper_title: "t".into(),
            arxiv_link: "a".into(),
            cif_link: "c".into(),
        }]);

        let json = to_pretty_json(&envelope).unwrap();
        let expected = "{\n  \"total_results\": 1,\n  \"materials\": [\n    {\n      \
                        \"paper_title\": \"t\",\n      \"arxiv_link\": \"a\",\n      \
                        \"cif_link\": \"c\"\n    }\n  ]\n}";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_error_output() {
        let output = error_output(&ToolError::missing_argument("query"));
        assert_eq!(output.content.len(), 1);
        assert_eq!(output.first_text(), Some("Error: Missing required argument 'query'"));
    }

    #[test]
    fn test_render_success() {
        let output = render(Ok("{}".to_string()));
        assert_eq!(output.first_text(), Some("{}"));
    }
}
