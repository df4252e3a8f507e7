//! CIF lookup MCP Server
//!
//! A Model Context Protocol (MCP) server that connects arXiv paper references to
//! crystal structures in the Crystallography Open Database (COD).
//!
//! # Features
//!
//! - **2 MCP Tools**: `search_cif` (free-text material search) and `check_cif`
//!   (which materials does a paper mention)
//! - **Pluggable repository**: deterministic in-memory fixture or the COD REST API
//! - **Never-failing tools**: every failure is rendered as a single `Error:` text block
//!
//! # Example
//!
//! ```no_run
//! use cif_mcp::{config::Config, server::McpServer, tools::ToolContext};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let ctx = ToolContext::from_config(&config)?;
//!     McpServer::new(ctx).run_stdio().await
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod repository;
pub mod server;
pub mod tools;

pub use client::CodClient;
pub use config::Config;
pub use error::{ClientError, ToolError, ToolErrorKind};
pub use repository::{FixtureRepository, MaterialLookupTable, MaterialRepository};
