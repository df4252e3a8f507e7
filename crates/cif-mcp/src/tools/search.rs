//! `search_cif`: find CIF files for materials matching a free-text query.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::config::limits;
use crate::error::ToolResult;
use crate::formatters;
use crate::models::{SearchCifInput, SearchResponse, SearchResult};

/// CIF search tool.
pub struct SearchCifTool;

impl SearchCifTool {
    /// Run the search and build the response envelope.
    pub async fn search(ctx: &ToolContext, input: &SearchCifInput) -> ToolResult<SearchResponse> {
        let query = input.query()?;
        let max_results = input.effective_max_results()?;

        tracing::debug!(query, max_results, "Starting CIF search");

        let records = ctx
            .lookup("search_materials", ctx.repository.search_materials(query, max_results))
            .await;

        let materials: Vec<SearchResult> =
            records.iter().take(max_results).map(SearchResult::from).collect();

        tracing::info!(results = materials.len(), "CIF search completed");
        Ok(SearchResponse::new(materials))
    }
}

#[async_trait::async_trait]
impl McpTool for SearchCifTool {
    fn name(&self) -> &'static str {
        "search_cif"
    }

    fn description(&self) -> &'static str {
        "Search for Crystallographic Information Files (CIF) associated with materials \
         research papers. Looks up crystal structures in the Crystallography Open Database \
         (COD) matching a material name, formula or topic, and returns paper titles, arXiv \
         links and CIF links for the relevant materials."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query for materials or topics (e.g., 'lithium-ion battery materials', 'LiCoO2', 'perovskite solar cells')"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of results to return (default: 5, max: 20)",
                    "minimum": limits::MIN_MAX_RESULTS,
                    "maximum": limits::MAX_MAX_RESULTS
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SearchCifInput = serde_json::from_value(input)?;
        let response = Self::search(ctx, &params).await?;
        formatters::to_pretty_json(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_licoo2() {
        let ctx = ToolContext::fixture();
        let response = SearchCifTool::search(&ctx, &SearchCifInput::new("LiCoO2", None))
            .await
            .unwrap();

        assert_eq!(response.total_results, 2);
        assert_eq!(
            response.materials[0].paper_title,
            "Crystal Structure of Lithium Cobalt Oxide (LiCoO2)"
        );
        assert!(response.materials.iter().all(|m| m.cif_link.ends_with("/1550396.cif")));
    }

    #[tokio::test]
    async fn test_search_zero_is_clamped_to_one() {
        let ctx = ToolContext::fixture();
        let response = SearchCifTool::search(&ctx, &SearchCifInput::new("lithium", Some(0)))
            .await
            .unwrap();
        assert_eq!(response.total_results, 1);
    }

    #[test]
    fn test_schema_requires_query() {
        let schema = SearchCifTool.input_schema();
        assert_eq!(schema["required"], json!(["query"]));
        assert_eq!(schema["properties"]["max_results"]["maximum"], 20);
    }
}
