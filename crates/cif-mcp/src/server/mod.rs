//! MCP server implementation.
//!
//! Provides both stdio (for desktop MCP hosts) and HTTP transports over a
//! shared JSON-RPC dispatcher.

pub mod protocol;
pub mod stdio;
pub mod transport;

use std::net::SocketAddr;

use crate::tools::{self, McpTool, ToolContext};

pub use protocol::{JsonRpcRequest, JsonRpcResponse};

/// MCP server for CIF lookups.
pub struct McpServer {
    /// Tool execution context.
    ctx: ToolContext,

    /// Registered tools.
    tools: Vec<Box<dyn McpTool>>,
}

impl McpServer {
    /// Create a new MCP server with all tools registered.
    #[must_use]
    pub fn new(ctx: ToolContext) -> Self {
        let tools = tools::register_all_tools();

        Self { ctx, tools }
    }

    /// Run the server in stdio mode.
    ///
    /// # Errors
    ///
    /// Returns error on I/O failure.
    pub async fn run_stdio(self) -> anyhow::Result<()> {
        tracing::info!("Starting MCP server in stdio mode");
        self.log_registered_tools();

        stdio::run_stdio(&self.tools, &self.ctx).await
    }

    /// Run the server in HTTP mode.
    ///
    /// # Errors
    ///
    /// Returns error on server failure.
    pub async fn run_http(self, port: u16) -> anyhow::Result<()> {
        tracing::info!("Starting MCP server in HTTP mode on port {}", port);
        self.log_registered_tools();

        let router = transport::create_router(self.tools, self.ctx);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        tracing::info!("HTTP server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }

    /// Dispatch one JSON-RPC request. Returns `None` for notifications.
    pub async fn handle(&self, request: &JsonRpcRequest) -> Option<JsonRpcResponse> {
        protocol::handle_request(request, &self.tools, &self.ctx).await
    }

    /// List all available tools.
    #[must_use]
    pub fn list_tools(&self) -> Vec<(&str, &str)> {
        self.tools.iter().map(|t| (t.name(), t.description())).collect()
    }

    fn log_registered_tools(&self) {
        let names: Vec<&str> = self.list_tools().into_iter().map(|(name, _)| name).collect();
        tracing::info!(tools = ?names, "Registered {} tools", names.len());
    }
}

impl std::fmt::Debug for McpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpServer").field("tools", &self.tools.len()).finish()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install CTRL+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
