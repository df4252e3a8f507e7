//! CIF lookup MCP Server - Entry Point
//!
//! Provides both stdio (for desktop MCP hosts) and HTTP transports.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cif_mcp::config::{Backend, Config};
use cif_mcp::server::McpServer;
use cif_mcp::tools::ToolContext;

#[derive(Parser, Debug)]
#[command(name = "cif-mcp")]
#[command(about = "MCP server for Crystallography Open Database CIF lookups")]
#[command(version)]
struct Cli {
    /// Material repository: fixture (built-in tables) or cod (live database)
    #[arg(long, default_value = "fixture", env = "CIF_BACKEND")]
    backend: Backend,

    /// COD REST API base URL (only used with --backend cod)
    #[arg(long, env = "COD_API_URL")]
    cod_url: Option<String>,

    /// Transport mode: stdio or http
    #[arg(long, default_value = "stdio")]
    transport: Transport,

    /// HTTP server port (only used with --transport http)
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Transport {
    /// Standard input/output
    #[default]
    Stdio,
    /// HTTP, one JSON-RPC message per POST
    Http,
}

/// Logs go to stderr; stdout carries the stdio protocol.
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        transport = ?cli.transport,
        backend = ?cli.backend,
        "Starting CIF MCP server"
    );

    let mut config = Config::from_env()?;
    config.backend = cli.backend;
    if let Some(url) = cli.cod_url {
        config.cod_api_url = url.trim_end_matches('/').to_string();
    }

    let ctx = ToolContext::from_config(&config)?;
    let server = McpServer::new(ctx);

    match cli.transport {
        Transport::Stdio => {
            tracing::info!("Running in stdio mode");
            server.run_stdio().await?;
        }
        Transport::Http => {
            tracing::info!(port = cli.port, "Running in HTTP mode");
            server.run_http(cli.port).await?;
        }
    }

    Ok(())
}
