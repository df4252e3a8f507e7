//! MCP tool implementations.
//!
//! Each tool:
//! 1. Parses and validates its arguments
//! 2. Queries the material repository (bounded by the lookup timeout)
//! 3. Returns a JSON envelope that [`McpTool::call`] wraps as one text block

mod check;
mod search;

pub use check::CheckCifTool;
pub use search::SearchCifTool;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::client::CodClient;
use crate::config::{Backend, Config, api};
use crate::error::{ClientError, ToolResult};
use crate::formatters;
use crate::models::{MaterialRecord, ToolOutput};
use crate::repository::{FixtureRepository, MaterialRepository};

/// Tool execution context.
#[derive(Clone)]
pub struct ToolContext {
    /// Material repository.
    pub repository: Arc<dyn MaterialRepository>,

    /// Deadline for a single repository lookup.
    pub lookup_timeout: Duration,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(repository: Arc<dyn MaterialRepository>) -> Self {
        Self { repository, lookup_timeout: api::LOOKUP_TIMEOUT }
    }

    /// Context backed by the built-in tables.
    #[must_use]
    pub fn fixture() -> Self {
        Self::new(Arc::new(FixtureRepository::new()))
    }

    /// Context for the backend selected in `config`.
    ///
    /// # Errors
    ///
    /// Returns error if the COD client cannot be built.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let repository: Arc<dyn MaterialRepository> = match config.backend {
            Backend::Fixture => Arc::new(FixtureRepository::new()),
            Backend::Cod => Arc::new(CodClient::new(config)?),
        };
        Ok(Self::new(repository).with_lookup_timeout(config.lookup_timeout))
    }

    /// Override the lookup deadline.
    #[must_use]
    pub const fn with_lookup_timeout(mut self, lookup_timeout: Duration) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }

    /// Run a repository lookup under the deadline.
    ///
    /// Failures and timeouts degrade to an empty result so the caller still
    /// produces a normal no-match payload.
    pub async fn lookup<F>(&self, operation: &'static str, fut: F) -> Vec<MaterialRecord>
    where
        F: Future<Output = Result<Vec<MaterialRecord>, ClientError>> + Send,
    {
        let outcome = match tokio::time::timeout(self.lookup_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(ClientError::Timeout(self.lookup_timeout)),
        };

        outcome.unwrap_or_else(|e| {
            tracing::warn!(
                repository = self.repository.name(),
                operation,
                error = %e,
                "Material lookup failed, returning no results"
            );
            Vec::new()
        })
    }
}

impl std::fmt::Debug for ToolContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolContext")
            .field("repository", &self.repository.name())
            .field("lookup_timeout", &self.lookup_timeout)
            .finish()
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "search_cif").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool, returning the pretty-printed JSON payload.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String>;

    /// Execute and render the outcome as exactly one text block.
    ///
    /// Never fails: errors become an `Error: ...` block.
    async fn call(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolOutput {
        let result = self.execute(ctx, input).await;
        if let Err(e) = &result {
            tracing::error!(tool = self.name(), kind = ?e.kind(), error = %e, "Tool call failed");
        }
        formatters::render(result)
    }
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![Box::new(SearchCifTool), Box::new(CheckCifTool)]
}
