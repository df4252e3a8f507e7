//! `check_cif`: report CIF files for materials mentioned by a paper.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::ToolResult;
use crate::formatters;
use crate::models::{CheckCifInput, CheckResponse, CheckResult};

/// CIF check tool.
pub struct CheckCifTool;

impl CheckCifTool {
    /// Run the check and build the response envelope.
    pub async fn check(ctx: &ToolContext, input: &CheckCifInput) -> ToolResult<CheckResponse> {
        tracing::debug!(
            paper_title = ?input.paper_title,
            paper_id = ?input.paper_id,
            "Checking paper for CIF files"
        );

        let records = match input.search_text() {
            Some(text) => {
                ctx.lookup("materials_in_text", ctx.repository.materials_in_text(&text)).await
            }
            None => Vec::new(),
        };

        let cif_files: Vec<CheckResult> = records.iter().map(CheckResult::from).collect();

        tracing::info!(found = cif_files.len(), "CIF check completed");
        Ok(CheckResponse::new(input.display_title(), cif_files))
    }
}

#[async_trait::async_trait]
impl McpTool for CheckCifTool {
    fn name(&self) -> &'static str {
        "check_cif"
    }

    fn description(&self) -> &'static str {
        "Check if a specific research paper has associated Crystallographic Information \
         Files (CIF) in the Crystallography Open Database (COD). Provide the paper title \
         or arXiv ID, and the tool will check for related CIF files."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paper_title": {
                    "type": "string",
                    "description": "Title of the research paper to check for CIF files"
                },
                "paper_id": {
                    "type": "string",
                    "description": "ArXiv ID of the paper (e.g., '2401.12345')"
                }
            },
            "required": []
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: CheckCifInput = serde_json::from_value(input)?;
        let response = Self::check(ctx, &params).await?;
        formatters::to_pretty_json(&response)
    }
}
